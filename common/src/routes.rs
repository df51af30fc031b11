//! POサービスのエンドポイントURL生成

use urlencoding::encode;

/// ブラウザから見た既定のAPIベース（開発サーバが /api をプロキシする）
pub const DEFAULT_API_BASE: &str = "/api/invoices";

/// エンドポイントURLの組み立て
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoRoutes {
    base: String,
}

impl PoRoutes {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `GET {base}/pos`
    pub fn list(&self) -> String {
        format!("{}/pos", self.base)
    }

    /// `POST {base}/pos/{filename}/parse`
    pub fn parse(&self, filename: &str) -> String {
        format!("{}/pos/{}/parse", self.base, encode(filename))
    }

    /// `GET {base}/pos/{filename}/file`
    pub fn file(&self, filename: &str) -> String {
        format!("{}/pos/{}/file", self.base, encode(filename))
    }

    /// `POST {base}/pos/open-folder`
    pub fn open_folder(&self) -> String {
        format!("{}/pos/open-folder", self.base)
    }

    /// `GET {base}/health`
    pub fn health(&self) -> String {
        format!("{}/health", self.base)
    }
}

impl Default for PoRoutes {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
