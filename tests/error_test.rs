//! エラーケーステスト
//!
//! 各種エラー条件での変換と表示を検証

use po_viewer::config::Config;
use po_viewer::error::PoViewerError;
use po_viewer_common::check_status;
use tempfile::tempdir;

/// 非2xxステータスは共通エラーとして透過的に表示される
#[test]
fn test_status_error_is_transparent() {
    let err: PoViewerError = check_status(500).unwrap_err().into();
    assert!(matches!(err, PoViewerError::Common(po_viewer_common::Error::Status(500))));
    assert_eq!(err.to_string(), "HTTP status 500");
}

/// 壊れた設定ファイル
#[test]
fn test_load_corrupt_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(PoViewerError::JsonParse(_))));
}

/// 書き込めない場所への保存
#[test]
fn test_save_into_file_as_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();

    let result = Config::default().save_to(&blocker.join("config.json"));
    assert!(matches!(result, Err(PoViewerError::Io(_))));
}

#[test]
fn test_not_found_message() {
    let err = PoViewerError::PoNotFound("missing.pdf".into());
    assert!(err.to_string().contains("missing.pdf"));
}
