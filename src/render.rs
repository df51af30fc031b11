//! ビューモデルのテキスト出力

use po_viewer_common::view::{
    DetailField, DetailsBody, DetailsView, FileViewerView, InvoiceFormView, InvoiceSource,
    LineItemRow, PoListView, SectionContent, INVOICE_PREFILL_HINT, NO_DATA_EXTRACTED,
    NO_FILE_SELECTED, NO_PO_SELECTED_HINT, NO_PO_SELECTED_TITLE,
};

pub fn render_po_list(list: &PoListView) -> String {
    let mut out = String::new();
    push_line(&mut out, &format!("Purchase Orders ({})", list.count_label));
    for row in &list.rows {
        let marker = if row.selected { ">" } else { " " };
        push_line(
            &mut out,
            &format!("{marker} {:<40} {}", row.filename, row.date_label),
        );
    }
    out
}

pub fn render_details(details: Option<&DetailsView>) -> String {
    let Some(details) = details else {
        return no_selection();
    };

    let mut out = String::new();
    if details.loading {
        push_line(&mut out, details.refresh_label);
    }
    match &details.body {
        DetailsBody::NoData => push_line(&mut out, NO_DATA_EXTRACTED),
        DetailsBody::Sections(sections) => {
            for section in sections {
                push_line(&mut out, &format!("== {} ==", section.title.to_uppercase()));
                match &section.content {
                    SectionContent::Fields(fields) => write_fields(&mut out, fields),
                    SectionContent::LineItems(items) => write_line_items(&mut out, items),
                }
                out.push('\n');
            }
        }
    }
    out
}

pub fn render_invoice_form(form: Option<&InvoiceFormView>) -> String {
    let Some(form) = form else {
        return no_selection();
    };

    let mut out = String::new();
    if form.source == InvoiceSource::PurchaseOrder {
        push_line(&mut out, INVOICE_PREFILL_HINT);
    }
    write_fields(&mut out, &form.fields);
    if !form.line_items.is_empty() {
        push_line(&mut out, "== LINE ITEMS ==");
        write_line_items(&mut out, &form.line_items);
    }
    out
}

pub fn render_file_viewer(viewer: &FileViewerView) -> String {
    match viewer {
        FileViewerView::Placeholder => format!("{NO_FILE_SELECTED}\n"),
        FileViewerView::Document { url, kind } => {
            format!("Source File Preview ({kind:?}): {url}\n")
        }
    }
}

fn no_selection() -> String {
    format!("{NO_PO_SELECTED_TITLE}\n{NO_PO_SELECTED_HINT}\n")
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn write_fields(out: &mut String, fields: &[DetailField]) {
    for field in fields {
        let marker = if field.highlight { "*" } else { " " };
        push_line(out, &format!("{marker} {:<16} {}", field.label, field.value));
    }
}

fn write_line_items(out: &mut String, items: &[LineItemRow]) {
    if items.is_empty() {
        push_line(out, "  (0 items)");
    }
    for item in items {
        push_line(out, &format!("  {:<40} {}", item.description, item.amount));
        push_line(out, &format!("    {}", item.quantity_line));
    }
}
