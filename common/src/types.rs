//! POサービスとやり取りする型の定義
//!
//! - PoRef: 一覧APIが返すPO参照
//! - ExtractedData: 解析APIが返す抽出結果
//! - LineItem: 抽出結果の明細行

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::Result;

/// PO参照（一覧の1行）
///
/// `id` はサービスによってファイル名だったり数値だったりするため文字列に正規化する。
/// `id` が無い行はファイル名をIDとして扱う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoRef {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    pub filename: String,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub date: Option<String>,
}

impl PoRef {
    pub fn document_kind(&self) -> DocumentKind {
        DocumentKind::from_filename(&self.filename)
    }
}

/// 解析結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedData {
    #[serde(deserialize_with = "lenient_string")]
    pub vendor_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub vendor_address: String,
    #[serde(deserialize_with = "lenient_string")]
    pub po_number: String,
    #[serde(deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(deserialize_with = "lenient_string")]
    pub total_amount: String,
    #[serde(deserialize_with = "lenient_items")]
    pub line_items: Vec<LineItem>,
}

/// 明細行
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(deserialize_with = "lenient_string")]
    pub quantity: String,
    #[serde(deserialize_with = "lenient_string")]
    pub unit_price: String,
    #[serde(deserialize_with = "lenient_string")]
    pub amount: String,
}

/// ヘルスチェック応答
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// ドキュメント種別（プレビュー方法の判定用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Image,
    Other,
}

impl DocumentKind {
    pub fn from_filename(filename: &str) -> Self {
        let ext = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => DocumentKind::Pdf,
            "png" | "jpg" | "jpeg" => DocumentKind::Image,
            _ => DocumentKind::Other,
        }
    }
}

/// 一覧APIのレスポンスボディをデコード
pub fn decode_po_list(body: &str) -> Result<Vec<PoRef>> {
    let mut pos: Vec<PoRef> = serde_json::from_str(body)?;
    for po in pos.iter_mut().filter(|po| po.id.is_empty()) {
        po.id = po.filename.clone();
    }
    Ok(pos)
}

/// 解析APIのレスポンスボディをデコード
pub fn decode_extracted_data(body: &str) -> Result<ExtractedData> {
    Ok(serde_json::from_str(body)?)
}

/// ヘルスチェックのレスポンスボディをデコード
pub fn decode_health(body: &str) -> Result<HealthStatus> {
    Ok(serde_json::from_str(body)?)
}

/// 文字列・数値・null のいずれでも受け付けて表示用文字列にする
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => number_to_string(&n),
        Some(other) => other.to_string(),
    })
}

/// 空文字と null は None
fn lenient_optional_string<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient_string(deserializer)?;
    Ok((!value.is_empty()).then_some(value))
}

fn lenient_items<'de, D>(deserializer: D) -> std::result::Result<Vec<LineItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<LineItem>>::deserialize(deserializer)?.unwrap_or_default())
}

fn number_to_string(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        // 2.0 -> "2"
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}
