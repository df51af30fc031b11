//! メインアプリケーションコンポーネント

use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;
use po_viewer_common::view::{details_view, file_viewer_view, invoice_form_view, po_list_view};
use po_viewer_common::{
    ExtractedData, ExtractionOutcome, ExtractionTicket, MainTab, PoRoutes, Result, ViewerState,
};

use crate::api::po_service;
use crate::components::{header::Header, main_view::MainView, po_list::PoList};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let routes = PoRoutes::default();
    let state = RwSignal::new(ViewerState::new());

    // マウント時に一覧を1回だけ取得
    load_pos(state, routes.clone());

    // PO選択ハンドラ
    let on_select = {
        let routes = routes.clone();
        move |id: String| {
            if let Some(ticket) = state.try_update(|s| s.select_by_id(&id)).flatten() {
                run_extraction(state, routes.clone(), ticket);
            }
        }
    };

    // 再解析ハンドラ（解析中は ViewerState 側で無視される）
    let on_refresh = {
        let routes = routes.clone();
        move |_: ()| {
            if let Some(ticket) = state.try_update(ViewerState::refresh).flatten() {
                run_extraction(state, routes.clone(), ticket);
            }
        }
    };

    // フォルダを開く（失敗してもログのみ）
    let on_open_folder = {
        let routes = routes.clone();
        move |_: ()| {
            let routes = routes.clone();
            spawn_local(async move {
                if let Err(err) = po_service::open_folder(&routes).await {
                    console::error!("Failed to open folder:", err.to_string());
                }
            });
        }
    };

    let on_close = move |_: ()| state.update(ViewerState::close);
    let on_tab = move |tab: MainTab| state.update(|s| s.set_active_tab(tab));

    let list = Memo::new(move |_| state.with(po_list_view));
    let selected = Memo::new(move |_| state.with(|s| s.selected().cloned()));
    let active_tab = Memo::new(move |_| state.with(ViewerState::active_tab));
    let viewer = Memo::new(move |_| state.with(|s| file_viewer_view(&routes, s.selected())));
    let details = Memo::new(move |_| state.with(details_view));
    let invoice = Memo::new(move |_| state.with(invoice_form_view));

    view! {
        <div class="app">
            <Header on_open_folder=on_open_folder.clone() />
            <div class="app-body">
                <PoList list=list on_select=on_select on_open_folder=on_open_folder />
                <MainView
                    selected=selected
                    active_tab=active_tab
                    viewer=viewer
                    details=details
                    invoice=invoice
                    on_tab=on_tab
                    on_refresh=on_refresh
                    on_close=on_close
                />
            </div>
        </div>
    }
}

fn load_pos(state: RwSignal<ViewerState>, routes: PoRoutes) {
    state.update(ViewerState::begin_listing);
    spawn_local(async move {
        let result = po_service::list_pos(&routes).await;
        if let Err(err) = &result {
            console::error!("Failed to fetch POs:", err.to_string());
        }
        state.update(|s| {
            s.finish_listing(result);
        });
    });
}

fn run_extraction(state: RwSignal<ViewerState>, routes: PoRoutes, ticket: ExtractionTicket) {
    spawn_local(async move {
        let result = po_service::parse_po(&routes, &ticket.filename).await;
        apply_extraction(state, &ticket, result);
    });
}

/// 解析レスポンスを状態へ反映する（失敗と破棄はコンソールに記録）
fn apply_extraction(
    state: RwSignal<ViewerState>,
    ticket: &ExtractionTicket,
    result: Result<ExtractedData>,
) -> Option<ExtractionOutcome> {
    if let Err(err) = &result {
        console::error!("Failed to extract data:", err.to_string());
    }
    let outcome = state.try_update(|s| s.complete_extraction(ticket, result));
    if outcome == Some(ExtractionOutcome::Stale) {
        console::log!("Discarded stale extraction for", ticket.filename.clone());
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use po_viewer_common::{decode_extracted_data, decode_po_list, Error};
    use wasm_bindgen_test::*;

    fn listed_state() -> RwSignal<ViewerState> {
        let mut initial = ViewerState::new();
        initial.finish_listing(decode_po_list(
            r#"[{"id": "a", "filename": "a.pdf"}, {"id": "b", "filename": "b.pdf"}]"#,
        ));
        RwSignal::new(initial)
    }

    fn select(state: RwSignal<ViewerState>, id: &str) -> ExtractionTicket {
        state
            .try_update(|s| s.select_by_id(id))
            .flatten()
            .expect("選択できるはず")
    }

    #[wasm_bindgen_test]
    fn test_stale_extraction_is_discarded() {
        let state = listed_state();
        let first = select(state, "a");
        let second = select(state, "b");
        let data = decode_extracted_data(r#"{"vendor_name": "Acme"}"#).expect("デコード失敗");

        let outcome = apply_extraction(state, &first, Ok(data.clone()));
        assert_eq!(outcome, Some(ExtractionOutcome::Stale));
        assert!(state.with_untracked(|s| s.extracted().is_none() && s.is_extracting()));

        let outcome = apply_extraction(state, &second, Ok(data));
        assert_eq!(outcome, Some(ExtractionOutcome::Applied));
        let vendor = state.with_untracked(|s| s.extracted().map(|d| d.vendor_name.clone()));
        assert_eq!(vendor.as_deref(), Some("Acme"));
    }

    #[wasm_bindgen_test]
    fn test_failed_extraction_clears_loading() {
        let state = listed_state();
        let ticket = select(state, "a");

        let outcome = apply_extraction(state, &ticket, Err(Error::Status(500)));
        assert_eq!(outcome, Some(ExtractionOutcome::Failed));
        assert!(state.with_untracked(|s| !s.is_extracting() && s.extracted().is_none()));
    }
}
