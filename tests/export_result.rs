mod common;

use common::{lecture_file, make_harness, FixedPicker};
use summarist::export::{ExportError, PathSavePicker};
use summarist::submit::SubmitError;
use summarist::ui::controller::{
    COPY_FAILED_MESSAGE, COPY_OK_MESSAGE, SAVE_FAILED_MESSAGE, SAVE_OK_MESSAGE,
};
use summarist::ui::notify::NoticeLevel;

const SUMMARY: &str = "# Lecture\n\n| a | b |\n|---|---|\n| 1 | 2 |\n";

#[tokio::test]
async fn copy_places_raw_markdown_on_clipboard() {
    let mut h = make_harness();
    h.transport.push_summary(SUMMARY);
    h.controller.set_input_from_text("text");
    h.controller.submit().await.unwrap();

    h.controller.copy_result().unwrap();

    assert_eq!(h.clipboard.contents().as_deref(), Some(SUMMARY));
    let last = h.notifier.last().unwrap();
    assert_eq!(last.level, NoticeLevel::Info);
    assert_eq!(last.message, COPY_OK_MESSAGE);
}

#[test]
fn copy_with_empty_result_copies_empty_string() {
    let mut h = make_harness();
    h.controller.copy_result().unwrap();
    assert_eq!(h.clipboard.contents().as_deref(), Some(""));
}

#[test]
fn copy_failure_is_reported() {
    let mut h = make_harness();
    h.clipboard.set_failing(true);

    let err = h.controller.copy_result().unwrap_err();

    assert!(matches!(err, ExportError::Clipboard(_)));
    assert_eq!(h.notifier.errors(), vec![COPY_FAILED_MESSAGE.to_string()]);
}

#[tokio::test]
async fn export_suggests_name_from_uploaded_file() {
    let mut h = make_harness();
    h.transport.push_summary(SUMMARY);
    h.controller.set_input_from_file(Some(lecture_file()));
    h.controller.submit().await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let mut picker = FixedPicker::new(Some(dir.path().join("lecture.md")));
    h.controller.export_result(&mut picker).unwrap();

    assert_eq!(picker.offered.len(), 1);
    let offered = &picker.offered[0];
    assert_eq!(offered.suggested_name, "lecture.md");
    assert_eq!(offered.mime_type, "text/markdown");
    assert_eq!(offered.extensions, &[".md"]);
}

#[tokio::test]
async fn export_suggests_default_name_for_pasted_text() {
    let mut h = make_harness();
    h.transport.push_summary(SUMMARY);
    h.controller.set_input_from_text("pasted");
    h.controller.submit().await.unwrap();

    let mut picker = FixedPicker::new(None);
    let _ = h.controller.export_result(&mut picker);

    assert_eq!(picker.offered[0].suggested_name, "summary.md");
}

#[tokio::test]
async fn export_writes_raw_markdown() {
    let mut h = make_harness();
    h.transport.push_summary(SUMMARY);
    h.controller.set_input_from_text("pasted");
    h.controller.submit().await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out.md");
    let mut picker = FixedPicker::new(Some(target.clone()));
    let saved = h.controller.export_result(&mut picker).unwrap();

    assert_eq!(saved, target);
    assert_eq!(std::fs::read_to_string(&target).unwrap(), SUMMARY);
    assert_eq!(h.notifier.last().unwrap().message, SAVE_OK_MESSAGE);
}

#[test]
fn cancelled_picker_reports_and_writes_nothing() {
    let mut h = make_harness();
    let mut picker = FixedPicker::new(None);

    let err = h.controller.export_result(&mut picker).unwrap_err();

    assert!(matches!(err, ExportError::Cancelled));
    assert_eq!(h.notifier.errors(), vec![SAVE_FAILED_MESSAGE.to_string()]);
}

#[test]
fn write_failure_reports_and_leaves_no_file() {
    let mut h = make_harness();
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("no-such-dir").join("out.md");
    let mut picker = FixedPicker::new(Some(target.clone()));

    let err = h.controller.export_result(&mut picker).unwrap_err();

    assert!(matches!(err, ExportError::Write { .. }));
    assert!(!target.exists());
    assert_eq!(h.notifier.errors(), vec![SAVE_FAILED_MESSAGE.to_string()]);
}

#[tokio::test]
async fn export_does_not_touch_result_or_state() {
    let mut h = make_harness();
    h.transport.push_summary(SUMMARY);
    h.controller.set_input_from_text("pasted");
    h.controller.submit().await.unwrap();
    let state = h.controller.submission_state().clone();

    let mut picker = FixedPicker::new(None);
    let _ = h.controller.export_result(&mut picker);

    assert_eq!(h.controller.result(), SUMMARY);
    assert_eq!(h.controller.submission_state(), &state);
}

#[tokio::test]
async fn path_picker_saves_suggestion_into_directory() {
    let mut h = make_harness();
    h.transport.push_summary(SUMMARY);
    h.controller.set_input_from_file(Some(lecture_file()));
    h.controller.submit().await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let mut picker = PathSavePicker::new(Some(dir.path().to_path_buf()), "/unused");
    let saved = h.controller.export_result(&mut picker).unwrap();

    assert_eq!(saved, dir.path().join("lecture.md"));
    assert_eq!(std::fs::read_to_string(saved).unwrap(), SUMMARY);
}

#[test]
fn export_suggests_name_from_selected_file_before_submit() {
    let mut h = make_harness();
    h.controller.set_input_from_file(Some(lecture_file()));

    let mut picker = FixedPicker::new(None);
    let _ = h.controller.export_result(&mut picker);

    assert_eq!(picker.offered[0].suggested_name, "lecture.md");
}

#[tokio::test]
async fn export_follows_file_kept_after_failed_submit() {
    let mut h = make_harness();
    h.transport.push_summary(SUMMARY);
    h.controller.set_input_from_text("pasted");
    h.controller.submit().await.unwrap();

    h.transport.push_error(SubmitError::ApiError {
        status: 502,
        message: "bad gateway".into(),
    });
    h.controller.set_input_from_file(Some(lecture_file()));
    let _ = h.controller.submit().await;

    let mut picker = FixedPicker::new(None);
    let _ = h.controller.export_result(&mut picker);

    assert_eq!(picker.offered[0].suggested_name, "lecture.md");
    assert_eq!(h.controller.result(), SUMMARY);
}
