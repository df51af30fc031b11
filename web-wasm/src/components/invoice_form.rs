//! 請求書変換フォームコンポーネント（読み取り専用）

use leptos::prelude::*;
use po_viewer_common::view::{
    DetailField, InvoiceFormView, InvoiceSource, INVOICE_PREFILL_HINT, SELECT_DOCUMENT_HINT,
};

use crate::components::po_details::render_line_item;

#[component]
pub fn InvoiceForm(#[prop(into)] form: Signal<Option<InvoiceFormView>>) -> impl IntoView {
    move || {
        let Some(form) = form.get() else {
            return view! { <div class="placeholder">{SELECT_DOCUMENT_HINT}</div> }.into_any();
        };

        let hint = matches!(form.source, InvoiceSource::PurchaseOrder)
            .then(|| view! { <p class="text-muted">{INVOICE_PREFILL_HINT}</p> });
        let fields: Vec<AnyView> = form.fields.into_iter().map(render_input).collect();
        let line_items: Vec<AnyView> = form.line_items.into_iter().map(render_line_item).collect();
        let has_items = !line_items.is_empty();

        view! {
            <form class="invoice-form" on:submit=|ev| ev.prevent_default()>
                {hint}
                <div class="invoice-grid">{fields}</div>
                {has_items.then(|| view! {
                    <section class="detail-section">
                        <h3>"Line Items"</h3>
                        <div class="detail-section-body">{line_items}</div>
                    </section>
                })}
            </form>
        }
        .into_any()
    }
}

fn render_input(field: DetailField) -> AnyView {
    view! {
        <label class="form-group">
            <span class="field-label">{field.label}</span>
            <input
                type="text"
                readonly=true
                class:highlight=field.highlight
                prop:value=field.value
            />
        </label>
    }
    .into_any()
}
