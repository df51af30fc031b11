//! POサービスHTTPクライアント

use std::time::Duration;

use po_viewer_common::{
    check_status, decode_extracted_data, decode_health, decode_po_list, Error, ExtractedData,
    HealthStatus, PoRef, PoRoutes, Result,
};
use tracing::debug;

use crate::config::Config;

pub struct PoClient {
    http: reqwest::Client,
    routes: PoRoutes,
}

impl PoClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(transport)?;
        Ok(Self {
            http,
            routes: PoRoutes::new(base_url),
        })
    }

    pub fn from_config(config: &Config) -> crate::error::Result<Self> {
        let url = config.effective_service_url()?;
        Ok(Self::new(&url, config.timeout_seconds.map(Duration::from_secs))?)
    }

    pub fn routes(&self) -> &PoRoutes {
        &self.routes
    }

    pub async fn list_pos(&self) -> Result<Vec<PoRef>> {
        let body = self.send_text(self.http.get(self.routes.list())).await?;
        decode_po_list(&body)
    }

    pub async fn parse_po(&self, filename: &str) -> Result<ExtractedData> {
        let body = self.send_text(self.http.post(self.routes.parse(filename))).await?;
        decode_extracted_data(&body)
    }

    /// 元ファイルのバイト列を取得
    pub async fn fetch_file(&self, filename: &str) -> Result<Vec<u8>> {
        let resp = self.send(self.http.get(self.routes.file(filename))).await?;
        let bytes = resp.bytes().await.map_err(transport)?;
        Ok(bytes.to_vec())
    }

    pub async fn open_folder(&self) -> Result<()> {
        self.send(self.http.post(self.routes.open_folder())).await?;
        Ok(())
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        let body = self.send_text(self.http.get(self.routes.health())).await?;
        decode_health(&body)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let resp = request.send().await.map_err(transport)?;
        debug!(url = %resp.url(), status = resp.status().as_u16(), "response");
        check_status(resp.status().as_u16())?;
        Ok(resp)
    }

    async fn send_text(&self, request: reqwest::RequestBuilder) -> Result<String> {
        let resp = self.send(request).await?;
        resp.text().await.map_err(transport)
    }
}

fn transport(err: reqwest::Error) -> Error {
    Error::Transport(err.to_string())
}
