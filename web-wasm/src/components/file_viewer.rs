//! ファイルビューアコンポーネント

use leptos::prelude::*;
use po_viewer_common::view::{FileViewerView, NO_FILE_SELECTED};
use po_viewer_common::DocumentKind;

#[component]
pub fn FileViewer(#[prop(into)] viewer: Signal<FileViewerView>) -> impl IntoView {
    move || match viewer.get() {
        FileViewerView::Placeholder => view! {
            <div class="file-viewer empty">{NO_FILE_SELECTED}</div>
        }
        .into_any(),
        FileViewerView::Document { url, kind } => {
            let preview = match kind {
                DocumentKind::Image => view! {
                    <img class="file-image" src=url alt="Source document" />
                }
                .into_any(),
                DocumentKind::Pdf | DocumentKind::Other => view! {
                    <iframe class="file-frame" src=url title="PDF Viewer"></iframe>
                }
                .into_any(),
            };
            view! {
                <div class="file-viewer">
                    <div class="file-viewer-bar">"Source File Preview"</div>
                    {preview}
                </div>
            }
            .into_any()
        }
    }
}
