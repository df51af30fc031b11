use crate::error::{PoViewerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// サービスURLを上書きする環境変数
pub const SERVICE_URL_ENV: &str = "PO_SERVICE_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// APIベースURL（例: http://127.0.0.1:8000/invoices）
    pub service_url: String,
    /// リクエストタイムアウト秒（未設定ならタイムアウトなし）
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_url: "http://127.0.0.1:8000/invoices".into(),
            timeout_seconds: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PoViewerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("po-viewer").join("config.json"))
    }

    /// 実際に使うサービスURL（環境変数を優先）
    pub fn effective_service_url(&self) -> Result<String> {
        let url = std::env::var(SERVICE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| self.service_url.clone());
        validate_service_url(&url)?;
        Ok(url)
    }

    pub fn set_service_url(&mut self, url: String) -> Result<()> {
        validate_service_url(&url)?;
        self.service_url = url;
        Ok(())
    }
}

fn validate_service_url(url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(PoViewerError::Config(format!(
            "service_url は http:// または https:// で始まる必要があります: {url}"
        )))
    }
}
