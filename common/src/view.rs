//! 画面表示用のビューモデル
//!
//! ViewerState から各パネルの表示内容を組み立てる純粋関数群。
//! Leptosコンポーネントとテキスト出力の両方がこれを描画する。

use crate::routes::PoRoutes;
use crate::state::ViewerState;
use crate::types::{DocumentKind, ExtractedData, LineItem, PoRef};

pub const EMPTY_VALUE: &str = "-";
pub const UNKNOWN_DATE: &str = "Unknown Date";
pub const NO_FILE_SELECTED: &str = "No file selected";
pub const NO_DATA_EXTRACTED: &str = "No data extracted yet";
pub const SELECT_DOCUMENT_HINT: &str = "Select a document to view details";
pub const NO_PO_SELECTED_TITLE: &str = "No Purchase Order Selected";
pub const NO_PO_SELECTED_HINT: &str = "Select a document from the list to view details";
pub const INVOICE_PREFILL_HINT: &str = "Refresh data to prefill the invoice from the document";

/// PO一覧パネル
#[derive(Debug, Clone, PartialEq)]
pub struct PoListView {
    pub count_label: String,
    pub rows: Vec<PoListRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PoListRow {
    pub id: String,
    pub filename: String,
    pub date_label: String,
    pub selected: bool,
}

/// ファイルビューア
#[derive(Debug, Clone, PartialEq)]
pub enum FileViewerView {
    Placeholder,
    Document { url: String, kind: DocumentKind },
}

/// 詳細パネル
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsView {
    pub refresh_label: &'static str,
    pub refresh_enabled: bool,
    pub loading: bool,
    pub body: DetailsBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailsBody {
    NoData,
    Sections(Vec<DetailSection>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailSection {
    pub title: &'static str,
    pub content: SectionContent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    Fields(Vec<DetailField>),
    LineItems(Vec<LineItemRow>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineItemRow {
    pub description: String,
    pub amount: String,
    pub quantity_line: String,
}

/// 請求書フォーム
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceFormView {
    pub source: InvoiceSource,
    pub fields: Vec<DetailField>,
    pub line_items: Vec<LineItemRow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceSource {
    Extracted,
    PurchaseOrder,
}

pub fn po_list_view(state: &ViewerState) -> PoListView {
    let rows = state
        .pos()
        .iter()
        .map(|po| PoListRow {
            id: po.id.clone(),
            filename: po.filename.clone(),
            date_label: po
                .date
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(UNKNOWN_DATE)
                .to_string(),
            selected: state.is_selected(&po.id),
        })
        .collect::<Vec<_>>();
    PoListView {
        count_label: format!("{} documents found", rows.len()),
        rows,
    }
}

pub fn file_viewer_view(routes: &PoRoutes, selected: Option<&PoRef>) -> FileViewerView {
    match selected {
        Some(po) => FileViewerView::Document {
            url: routes.file(&po.filename),
            kind: po.document_kind(),
        },
        None => FileViewerView::Placeholder,
    }
}

/// 選択中のPOがなければ None
pub fn details_view(state: &ViewerState) -> Option<DetailsView> {
    state.selected()?;
    let loading = state.is_extracting();
    let body = match state.extracted() {
        Some(data) => DetailsBody::Sections(detail_sections(data)),
        None => DetailsBody::NoData,
    };
    Some(DetailsView {
        refresh_label: if loading { "Refreshing..." } else { "Refresh Data" },
        refresh_enabled: !loading,
        loading,
        body,
    })
}

pub fn detail_sections(data: &ExtractedData) -> Vec<DetailSection> {
    vec![
        DetailSection {
            title: "Vendor Information",
            content: SectionContent::Fields(vec![
                field("Vendor Name", &data.vendor_name),
                field("Address", &data.vendor_address),
            ]),
        },
        DetailSection {
            title: "Invoice Details",
            content: SectionContent::Fields(vec![
                field("PO Number", &data.po_number),
                field("Date", &data.date),
                DetailField {
                    highlight: true,
                    ..field("Total Amount", &data.total_amount)
                },
            ]),
        },
        DetailSection {
            title: "Line Items",
            content: SectionContent::LineItems(line_item_rows(&data.line_items)),
        },
    ]
}

/// 解析結果があればそれを、なければPO参照を元にフォームを組み立てる
pub fn invoice_form_view(state: &ViewerState) -> Option<InvoiceFormView> {
    let po = state.selected()?;
    let view = match state.extracted() {
        Some(data) => InvoiceFormView {
            source: InvoiceSource::Extracted,
            fields: vec![
                field("Bill To", &data.vendor_name),
                field("Billing Address", &data.vendor_address),
                field("PO Number", &data.po_number),
                field("Order Date", &data.date),
                DetailField {
                    highlight: true,
                    ..field("Invoice Amount", &data.total_amount)
                },
            ],
            line_items: line_item_rows(&data.line_items),
        },
        None => InvoiceFormView {
            source: InvoiceSource::PurchaseOrder,
            fields: vec![
                field("Source File", &po.filename),
                field("Order Date", po.date.as_deref().unwrap_or_default()),
            ],
            line_items: Vec::new(),
        },
    };
    Some(view)
}

fn line_item_rows(items: &[LineItem]) -> Vec<LineItemRow> {
    items
        .iter()
        .map(|item| LineItemRow {
            description: display_value(&item.description).to_string(),
            amount: display_value(&item.amount).to_string(),
            quantity_line: format!(
                "Qty: {} × {}",
                display_value(&item.quantity),
                display_value(&item.unit_price)
            ),
        })
        .collect()
}

fn field(label: &'static str, value: &str) -> DetailField {
    DetailField {
        label,
        value: display_value(value).to_string(),
        highlight: false,
    }
}

fn display_value(value: &str) -> &str {
    if value.trim().is_empty() {
        EMPTY_VALUE
    } else {
        value
    }
}
