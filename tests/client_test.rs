//! POサービスクライアントテスト
//!
//! ローカルのスタブHTTPサーバに対して各エンドポイントを検証

use po_viewer::client::PoClient;
use po_viewer_common::{Error, ExtractionOutcome, ViewerState};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// (メソッド, パス, ステータス, ボディ)
type Route = (&'static str, &'static str, u16, &'static str);

/// 指定ルートに応答するスタブサーバを起動し、ベースURLを返す
async fn spawn_stub(routes: Vec<Route>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind失敗");
    let addr = listener.local_addr().expect("アドレス取得失敗");

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let routes = routes.clone();
            tokio::spawn(async move {
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut chunk).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => buf.extend_from_slice(&chunk[..n]),
                    }
                }
                let head = String::from_utf8_lossy(&buf).to_string();
                let mut parts = head.split_whitespace();
                let method = parts.next().unwrap_or_default();
                let path = parts.next().unwrap_or_default();

                let (status, body) = routes
                    .iter()
                    .find(|(m, p, _, _)| *m == method && *p == path)
                    .map(|(_, _, s, b)| (*s, *b))
                    .unwrap_or((404, r#"{"detail":"Not Found"}"#));

                let header = format!(
                    "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    body.len()
                );
                let _ = socket.write_all(header.as_bytes()).await;
                let _ = socket.write_all(body.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{addr}/invoices")
}

fn client(base: &str) -> PoClient {
    PoClient::new(base, Some(Duration::from_secs(5))).expect("クライアント作成失敗")
}

#[tokio::test]
async fn test_list_pos_with_numeric_id() {
    let base = spawn_stub(vec![(
        "GET",
        "/invoices/pos",
        200,
        r#"[{"id": 1, "filename": "a.pdf"}, {"id": "scan.png", "filename": "scan.png", "date": "2023-11-21"}]"#,
    )])
    .await;

    let pos = client(&base).list_pos().await.expect("一覧取得失敗");
    assert_eq!(pos.len(), 2);
    assert_eq!(pos[0].id, "1");
    assert_eq!(pos[0].date, None);
    assert_eq!(pos[1].date.as_deref(), Some("2023-11-21"));
}

#[tokio::test]
async fn test_list_pos_empty() {
    let base = spawn_stub(vec![("GET", "/invoices/pos", 200, "[]")]).await;
    let pos = client(&base).list_pos().await.expect("一覧取得失敗");
    assert!(pos.is_empty());
}

#[tokio::test]
async fn test_parse_po_with_empty_line_items() {
    let base = spawn_stub(vec![(
        "POST",
        "/invoices/pos/a.pdf/parse",
        200,
        r#"{"vendor_name": "Acme Corp", "total_amount": 120.0, "line_items": []}"#,
    )])
    .await;

    let data = client(&base).parse_po("a.pdf").await.expect("解析失敗");
    assert_eq!(data.vendor_name, "Acme Corp");
    assert_eq!(data.total_amount, "120");
    assert!(data.line_items.is_empty());
}

#[tokio::test]
async fn test_parse_po_encodes_filename() {
    let base = spawn_stub(vec![(
        "POST",
        "/invoices/pos/PO%201001.pdf/parse",
        200,
        r#"{"po_number": "PO-1001"}"#,
    )])
    .await;

    let data = client(&base).parse_po("PO 1001.pdf").await.expect("解析失敗");
    assert_eq!(data.po_number, "PO-1001");
}

#[tokio::test]
async fn test_parse_po_server_error() {
    let base = spawn_stub(vec![(
        "POST",
        "/invoices/pos/a.pdf/parse",
        500,
        r#"{"detail": "boom"}"#,
    )])
    .await;

    let result = client(&base).parse_po("a.pdf").await;
    assert!(matches!(result, Err(Error::Status(500))));
}

/// 失敗した抽出は状態に反映され、データは空のまま
#[tokio::test]
async fn test_failed_extraction_leaves_no_data() {
    let base = spawn_stub(vec![
        ("GET", "/invoices/pos", 200, r#"[{"id": "a.pdf", "filename": "a.pdf"}]"#),
        ("POST", "/invoices/pos/a.pdf/parse", 500, "{}"),
    ])
    .await;
    let client = client(&base);

    let mut state = ViewerState::new();
    state.begin_listing();
    state.finish_listing(client.list_pos().await);
    let ticket = state.select_by_id("a.pdf").expect("選択できるはず");

    let outcome = state.complete_extraction(&ticket, client.parse_po(&ticket.filename).await);
    assert_eq!(outcome, ExtractionOutcome::Failed);
    assert!(!state.is_extracting());
    assert!(state.extracted().is_none());
}

#[tokio::test]
async fn test_open_folder() {
    let base = spawn_stub(vec![(
        "POST",
        "/invoices/pos/open-folder",
        200,
        r#"{"status": "opened"}"#,
    )])
    .await;
    client(&base).open_folder().await.expect("フォルダを開けるはず");
}

#[tokio::test]
async fn test_open_folder_failure() {
    let base = spawn_stub(vec![]).await;
    let result = client(&base).open_folder().await;
    assert!(matches!(result, Err(Error::Status(404))));
}

/// フォルダを開けなくても一覧と選択はそのまま
#[tokio::test]
async fn test_open_folder_failure_keeps_state() {
    let base = spawn_stub(vec![
        ("GET", "/invoices/pos", 200, r#"[{"id": 1, "filename": "a.pdf"}, {"id": 2, "filename": "b.pdf"}]"#),
        ("POST", "/invoices/pos/b.pdf/parse", 200, r#"{"vendor_name": "Acme"}"#),
    ])
    .await;
    let client = client(&base);

    let mut state = ViewerState::new();
    state.begin_listing();
    state.finish_listing(client.list_pos().await);
    let ticket = state.select_by_id("2").expect("選択できるはず");
    state.complete_extraction(&ticket, client.parse_po(&ticket.filename).await);
    let snapshot = state.clone();

    let result = client.open_folder().await;
    assert!(matches!(result, Err(Error::Status(404))));
    assert_eq!(state, snapshot);
    assert_eq!(state.pos().len(), 2);
    assert_eq!(state.selected().map(|po| po.filename.as_str()), Some("b.pdf"));
    assert!(state.extracted().is_some());
}

#[tokio::test]
async fn test_fetch_file_bytes() {
    let base = spawn_stub(vec![(
        "GET",
        "/invoices/pos/a.pdf/file",
        200,
        "%PDF-1.4\n%binary",
    )])
    .await;

    let bytes = client(&base).fetch_file("a.pdf").await.expect("取得失敗");
    assert_eq!(bytes, b"%PDF-1.4\n%binary");
}

#[tokio::test]
async fn test_health() {
    let base = spawn_stub(vec![("GET", "/invoices/health", 200, r#"{"status": "ok"}"#)]).await;
    let health = client(&base).health().await.expect("ヘルスチェック失敗");
    assert!(health.is_ok());
}

/// 接続できない場合はトランスポートエラー
#[tokio::test]
async fn test_connection_refused() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind失敗");
    let addr = listener.local_addr().expect("アドレス取得失敗");
    drop(listener);

    let result = client(&format!("http://{addr}/invoices")).list_pos().await;
    assert!(matches!(result, Err(Error::Transport(_))));
}
