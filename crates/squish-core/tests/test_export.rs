use squish_core::error::SquishError;
use squish_core::export::{save_copy, DragPayload, SaveOutcome};

#[test]
fn test_save_copies_output() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("out.jpg");
    std::fs::write(&source, b"jpeg bytes").unwrap();
    let dest = dir.path().join("kept.jpg");

    let outcome = save_copy(&source, Some(&dest)).unwrap();
    assert_eq!(outcome, SaveOutcome::Saved(dest.clone()));
    assert_eq!(std::fs::read(&dest).unwrap(), b"jpeg bytes");
}

#[test]
fn test_dismissed_dialog_is_cancelled_not_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("out.jpg");
    std::fs::write(&source, b"x").unwrap();
    assert_eq!(save_copy(&source, None).unwrap(), SaveOutcome::Cancelled);
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("out.jpg");
    std::fs::write(&source, b"x").unwrap();
    let dest = dir.path().join("no").join("such").join("dir.jpg");

    let err = save_copy(&source, Some(&dest)).unwrap_err();
    match err {
        SquishError::SaveFailed { path, .. } => assert_eq!(path, dest),
        other => panic!("expected SaveFailed, got {other:?}"),
    }
}

#[test]
fn test_drag_payload_for_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a b.jpg");
    let payload = DragPayload::for_file(&path).unwrap();
    assert!(payload.uri.starts_with("file://"));
    assert!(payload.uri.ends_with("/a%20b.jpg"));
    assert_eq!(payload.mime, "text/uri-list");
}
