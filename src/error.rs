use thiserror::Error;

#[derive(Error, Debug)]
pub enum PoViewerError {
    #[error(transparent)]
    Common(#[from] po_viewer_common::Error),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("POが見つかりません: {0}")]
    PoNotFound(String),

    #[error("PO サービスが応答しません: {0}")]
    Unhealthy(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("ログ初期化エラー: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, PoViewerError>;
