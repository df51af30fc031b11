//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// ブラウザとCLIの両方でPOサービス呼び出しの失敗を表す。
#[derive(Error, Debug)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// HTTPステータスを検査し、2xx以外はエラーにする
pub fn check_status(status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(Error::Status(status))
    }
}
