//! PO Viewer Common Library
//!
//! ブラウザ(WASM)とCLIで共有される型・状態・ビューモデル

pub mod error;
pub mod routes;
pub mod state;
pub mod types;
pub mod view;

pub use error::{check_status, Error, Result};
pub use routes::{PoRoutes, DEFAULT_API_BASE};
pub use state::{ExtractionOutcome, ExtractionTicket, MainTab, Phase, ViewerState};
pub use types::{
    decode_extracted_data, decode_health, decode_po_list, DocumentKind, ExtractedData,
    HealthStatus, LineItem, PoRef,
};
