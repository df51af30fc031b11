//! PO詳細コンポーネント

use leptos::prelude::*;
use po_viewer_common::view::{
    DetailField, DetailSection, DetailsBody, DetailsView, LineItemRow, SectionContent,
    NO_DATA_EXTRACTED, SELECT_DOCUMENT_HINT,
};

#[component]
pub fn PoDetails<FR>(
    #[prop(into)] details: Signal<Option<DetailsView>>,
    on_refresh: FR,
) -> impl IntoView
where
    FR: Fn(()) + 'static + Clone + Send + Sync,
{
    move || {
        let Some(details) = details.get() else {
            return view! { <div class="placeholder">{SELECT_DOCUMENT_HINT}</div> }.into_any();
        };

        view! {
            <div class="po-details">
                <div class="panel-header">
                    <h2>"PO Details"</h2>
                    <button
                        class="btn btn-primary"
                        disabled=!details.refresh_enabled
                        on:click={
                            let on_refresh = on_refresh.clone();
                            move |_| on_refresh(())
                        }
                    >
                        {details.loading.then(|| view! { <span class="spinner"></span> })}
                        {details.refresh_label}
                    </button>
                </div>
                <div class="panel-body">{render_body(details.body)}</div>
            </div>
        }
        .into_any()
    }
}

fn render_body(body: DetailsBody) -> AnyView {
    match body {
        DetailsBody::NoData => view! {
            <div class="placeholder">
                <span class="placeholder-icon">"⚠"</span>
                <p>{NO_DATA_EXTRACTED}</p>
            </div>
        }
        .into_any(),
        DetailsBody::Sections(sections) => {
            let sections: Vec<AnyView> = sections.into_iter().map(render_section).collect();
            view! { <div class="detail-sections">{sections}</div> }.into_any()
        }
    }
}

fn render_section(section: DetailSection) -> AnyView {
    let content: Vec<AnyView> = match section.content {
        SectionContent::Fields(fields) => fields.into_iter().map(render_field).collect(),
        SectionContent::LineItems(items) => items.into_iter().map(render_line_item).collect(),
    };
    view! {
        <section class="detail-section">
            <h3>{section.title}</h3>
            <div class="detail-section-body">{content}</div>
        </section>
    }
    .into_any()
}

pub(crate) fn render_field(field: DetailField) -> AnyView {
    view! {
        <div class="field">
            <span class="field-label">{field.label}</span>
            <span class="field-value" class:highlight=field.highlight>{field.value}</span>
        </div>
    }
    .into_any()
}

pub(crate) fn render_line_item(item: LineItemRow) -> AnyView {
    view! {
        <div class="line-item">
            <div class="line-item-head">
                <span>{item.description}</span>
                <span class="line-item-amount">{item.amount}</span>
            </div>
            <div class="line-item-qty">{item.quantity_line}</div>
        </div>
    }
    .into_any()
}
