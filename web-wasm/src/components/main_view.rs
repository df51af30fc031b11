//! メインビュー（タブ切替）コンポーネント

use leptos::prelude::*;
use po_viewer_common::view::{
    DetailsView, FileViewerView, InvoiceFormView, NO_PO_SELECTED_HINT, NO_PO_SELECTED_TITLE,
};
use po_viewer_common::{MainTab, PoRef};

use crate::components::{file_viewer::FileViewer, invoice_form::InvoiceForm, po_details::PoDetails};

#[component]
pub fn MainView<FT, FR, FC>(
    #[prop(into)] selected: Signal<Option<PoRef>>,
    #[prop(into)] active_tab: Signal<MainTab>,
    #[prop(into)] viewer: Signal<FileViewerView>,
    #[prop(into)] details: Signal<Option<DetailsView>>,
    #[prop(into)] invoice: Signal<Option<InvoiceFormView>>,
    on_tab: FT,
    on_refresh: FR,
    on_close: FC,
) -> impl IntoView
where
    FT: Fn(MainTab) + 'static + Clone + Send + Sync,
    FR: Fn(()) + 'static + Clone + Send + Sync,
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    move || {
        let Some(po) = selected.get() else {
            return view! {
                <div class="main-view empty">
                    <div class="empty-icon">"📄"</div>
                    <h3>{NO_PO_SELECTED_TITLE}</h3>
                    <p class="text-muted">{NO_PO_SELECTED_HINT}</p>
                </div>
            }
            .into_any();
        };

        let tabs: Vec<AnyView> = MainTab::ALL
            .into_iter()
            .map(|tab| {
                let on_tab = on_tab.clone();
                view! {
                    <button
                        class="tab"
                        class:active=move || active_tab.get() == tab
                        on:click=move |_| on_tab(tab)
                    >
                        {tab.label()}
                    </button>
                }
                .into_any()
            })
            .collect();

        let on_refresh = on_refresh.clone();
        let content = move || match active_tab.get() {
            MainTab::Document => view! { <FileViewer viewer=viewer /> }.into_any(),
            MainTab::Details => view! {
                <PoDetails details=details on_refresh=on_refresh.clone() />
            }
            .into_any(),
            MainTab::Invoice => view! { <InvoiceForm form=invoice /> }.into_any(),
        };

        view! {
            <div class="main-view">
                <div class="main-header">
                    <div class="main-title">
                        <span class="main-title-icon">"📄"</span>
                        <h2>{po.filename}</h2>
                    </div>
                    <button
                        class="btn btn-icon"
                        title="Close"
                        on:click={
                            let on_close = on_close.clone();
                            move |_| on_close(())
                        }
                    >
                        "✕"
                    </button>
                </div>
                <nav class="tabs">{tabs}</nav>
                <div class="main-content">{content}</div>
            </div>
        }
        .into_any()
    }
}
