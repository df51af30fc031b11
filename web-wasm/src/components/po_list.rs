//! PO一覧コンポーネント

use leptos::prelude::*;
use po_viewer_common::view::{PoListRow, PoListView};

#[component]
pub fn PoList<FS, FO>(
    #[prop(into)] list: Signal<PoListView>,
    on_select: FS,
    on_open_folder: FO,
) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone + Send + Sync,
    FO: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <aside class="po-list">
            <div class="po-list-header">
                <div>
                    <h2>"Purchase Orders"</h2>
                    <p class="text-muted">{move || list.with(|l| l.count_label.clone())}</p>
                </div>
                <button
                    class="btn btn-icon"
                    title="Open Folder"
                    on:click={
                        let on_open_folder = on_open_folder.clone();
                        move |_| on_open_folder(())
                    }
                >
                    "📂"
                </button>
            </div>

            <div class="po-list-rows">
                <For
                    each=move || list.with(|l| l.rows.clone())
                    // 選択状態もキーに含めて、選択変更時に行を描き直す
                    key=|row| (row.id.clone(), row.selected)
                    children=move |row| {
                        let on_select = on_select.clone();
                        view! { <PoRow row=row on_select=on_select /> }
                    }
                />
            </div>
        </aside>
    }
}

#[component]
fn PoRow<FS>(row: PoListRow, on_select: FS) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone + Send + Sync,
{
    let selected = row.selected;

    view! {
        <div
            class="po-row"
            class:selected=selected
            on:click={
                let on_select = on_select.clone();
                let id = row.id.clone();
                move |_| on_select(id.clone())
            }
        >
            <div class="po-row-icon">"📄"</div>
            <div class="po-row-text">
                <div class="po-row-name">{row.filename.clone()}</div>
                <div class="po-row-date">{row.date_label.clone()}</div>
            </div>
            {selected.then(|| view! { <span class="po-row-chevron">"›"</span> })}
        </div>
    }
}
