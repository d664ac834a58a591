/// Name proposed when the result came from pasted text.
pub const DEFAULT_SAVE_NAME: &str = "summary.md";

/// Suggest a markdown filename for a result.
///
/// The last extension of the uploaded file is replaced by `.md`; a name
/// without an extension gets `.md` appended.
pub fn suggested_file_name(uploaded: Option<&str>) -> String {
    let Some(name) = uploaded.filter(|n| !n.is_empty()) else {
        return DEFAULT_SAVE_NAME.to_string();
    };

    match name.rfind('.') {
        // A leading dot marks a hidden file, not an extension.
        Some(idx) if idx > 0 && idx + 1 < name.len() => format!("{}.md", &name[..idx]),
        _ => format!("{}.md", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_extension() {
        assert_eq!(suggested_file_name(Some("lecture.mp4")), "lecture.md");
    }

    #[test]
    fn replaces_only_last_extension() {
        assert_eq!(suggested_file_name(Some("week.1.notes.txt")), "week.1.notes.md");
    }

    #[test]
    fn pasted_text_uses_default() {
        assert_eq!(suggested_file_name(None), "summary.md");
        assert_eq!(suggested_file_name(Some("")), "summary.md");
    }

    #[test]
    fn appends_when_no_extension() {
        assert_eq!(suggested_file_name(Some("transcript")), "transcript.md");
        assert_eq!(suggested_file_name(Some(".hidden")), ".hidden.md");
    }
}
