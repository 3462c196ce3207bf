use super::*;
use std::sync::mpsc;
use std::time::Duration;
use tempfile::tempdir;

fn recv(rx: &mpsc::Receiver<SessionMessage>) -> SessionMessage {
    rx.recv_timeout(Duration::from_secs(5))
        .expect("runtime should report a completion")
}

#[test]
fn test_load_dir_sorts_dirs_first_and_filters_junk() {
    let dir = tempdir().unwrap();
    std::fs::create_dir(dir.path().join("src")).unwrap();
    std::fs::write(dir.path().join("src").join("lib.rs"), "").unwrap();
    std::fs::create_dir(dir.path().join("empty")).unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    std::fs::write(dir.path().join("B.txt"), "").unwrap();
    std::fs::write(dir.path().join("a.txt"), "").unwrap();

    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx).unwrap();
    runtime.load_dir(dir.path().to_path_buf());

    match recv(&rx) {
        SessionMessage::DirLoaded { entries, .. } => {
            let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
            assert_eq!(names, ["empty", "src", "a.txt", "B.txt"]);
            assert!(!entries[0].has_children);
            assert!(entries[1].has_children);
            assert_eq!(entries[1].icon, FOLDER_ICON);
            assert_eq!(entries[3].icon, DocKind::PlainText.icon_ref());
        }
        _ => panic!("expected DirLoaded"),
    }
}

#[test]
fn test_load_dir_failure_reports_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing");

    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx).unwrap();
    runtime.load_dir(missing.clone());

    match recv(&rx) {
        SessionMessage::DirLoadError { path, error } => {
            assert_eq!(path, missing);
            assert!(!error.is_empty());
        }
        _ => panic!("expected DirLoadError"),
    }
}

#[test]
fn test_write_then_read_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");

    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx).unwrap();

    runtime.write_file(path.clone(), "Hello, World!".to_string(), 7);
    match recv(&rx) {
        SessionMessage::FileSaved { path: saved, version } => {
            assert_eq!(saved, path);
            assert_eq!(version, 7);
        }
        _ => panic!("expected FileSaved"),
    }

    runtime.load_file(path.clone());
    match recv(&rx) {
        SessionMessage::FileLoaded { content, .. } => {
            assert_eq!(content, "Hello, World!");
        }
        _ => panic!("expected FileLoaded"),
    }
}

#[test]
fn test_load_missing_file_reports_error() {
    let dir = tempdir().unwrap();

    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx).unwrap();
    runtime.load_file(dir.path().join("missing.txt"));

    assert!(matches!(recv(&rx), SessionMessage::FileLoadError { .. }));
}
