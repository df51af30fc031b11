//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header<FO>(on_open_folder: FO) -> impl IntoView
where
    FO: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <header class="header">
            <div class="header-brand">
                <div class="header-logo">"PO"</div>
                <div>
                    <h1>"PO to Invoice Converter"</h1>
                    <p class="text-muted">"Manage purchase orders and generate invoices"</p>
                </div>
            </div>
            <button
                class="btn btn-dark"
                on:click={
                    let on_open_folder = on_open_folder.clone();
                    move |_| on_open_folder(())
                }
            >
                "Open POs"
            </button>
        </header>
    }
}
