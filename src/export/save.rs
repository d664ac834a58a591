//! Save-location picking and atomic writes.

use std::io::Write;
use std::path::{Path, PathBuf};

use super::error::ExportError;

/// What the save dialog is asked to offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub suggested_name: String,
    pub description: &'static str,
    pub mime_type: &'static str,
    pub extensions: &'static [&'static str],
}

impl SaveRequest {
    /// Request restricted to markdown files.
    pub fn markdown(suggested_name: impl Into<String>) -> Self {
        Self {
            suggested_name: suggested_name.into(),
            description: "Markdown Files",
            mime_type: "text/markdown",
            extensions: &[".md"],
        }
    }

    /// Whether `path` passes the accept filter.
    pub fn accepts(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        let name = name.to_ascii_lowercase();
        self.extensions.iter().any(|ext| name.ends_with(ext))
    }
}

/// Lets the user choose where a result is written.
///
/// Returns `None` when the user cancels.
pub trait SavePicker {
    fn pick(&mut self, request: &SaveRequest) -> Option<PathBuf>;
}

/// Picker for the terminal: resolves a path given on the command line.
///
/// With no path, the suggestion lands in `base_dir`. A directory gets the
/// suggested name joined to it. Paths failing the markdown filter cancel.
pub struct PathSavePicker {
    requested: Option<PathBuf>,
    base_dir: PathBuf,
}

impl PathSavePicker {
    pub fn new(requested: Option<PathBuf>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            requested,
            base_dir: base_dir.into(),
        }
    }
}

impl SavePicker for PathSavePicker {
    fn pick(&mut self, request: &SaveRequest) -> Option<PathBuf> {
        let target = match self.requested.take() {
            Some(path) if path.is_dir() => path.join(&request.suggested_name),
            Some(path) if path.is_relative() => self.base_dir.join(path),
            Some(path) => path,
            None => self.base_dir.join(&request.suggested_name),
        };

        if !request.accepts(&target) {
            tracing::warn!(path = %target.display(), "Save target rejected by markdown filter");
            return None;
        }
        Some(target)
    }
}

/// Mode for newly created files; temp files start owner-only.
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Permissions the written file should end up with: those of the file being
/// replaced, else the usual mode for a new file.
fn target_permissions(path: &Path) -> Option<std::fs::Permissions> {
    if let Ok(meta) = std::fs::metadata(path) {
        return Some(meta.permissions());
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(std::fs::Permissions::from_mode(NEW_FILE_MODE))
    }
    #[cfg(not(unix))]
    {
        None
    }
}

/// Write `contents` to `path` all-or-nothing.
///
/// Data goes to a temporary file in the same directory which is then
/// renamed over the target, so readers never observe a partial file.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), ExportError> {
    let write_err = |source: std::io::Error| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    if let Some(permissions) = target_permissions(path) {
        tmp.as_file().set_permissions(permissions).map_err(write_err)?;
    }
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
