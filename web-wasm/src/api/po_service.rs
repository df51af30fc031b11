//! POサービス連携（fetch API）
//!
//! レスポンスボディはテキストで受け取り、共通ライブラリのデコーダで解釈する。

use po_viewer_common::{
    check_status, decode_extracted_data, decode_po_list, Error, ExtractedData, PoRef, PoRoutes,
    Result,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// PO一覧を取得
pub async fn list_pos(routes: &PoRoutes) -> Result<Vec<PoRef>> {
    let resp = send("GET", &routes.list()).await?;
    let body = read_text(&resp).await?;
    decode_po_list(&body)
}

/// POの解析を要求
pub async fn parse_po(routes: &PoRoutes, filename: &str) -> Result<ExtractedData> {
    let resp = send("POST", &routes.parse(filename)).await?;
    let body = read_text(&resp).await?;
    decode_extracted_data(&body)
}

/// サーバ側でPOフォルダを開く（ボディは使わない）
pub async fn open_folder(routes: &PoRoutes) -> Result<()> {
    send("POST", &routes.open_folder()).await.map(|_| ())
}

async fn send(method: &str, url: &str) -> Result<Response> {
    let opts = RequestInit::new();
    opts.set_method(method);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    let window = web_sys::window().ok_or_else(|| Error::Transport("window unavailable".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    check_status(resp.status())?;
    Ok(resp)
}

async fn read_text(resp: &Response) -> Result<String> {
    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    text.as_string()
        .ok_or_else(|| Error::Transport("response body is not text".into()))
}

fn js_error(value: JsValue) -> Error {
    let message = value.as_string().unwrap_or_else(|| format!("{:?}", value));
    Error::Transport(message)
}
