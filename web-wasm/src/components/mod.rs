//! UIコンポーネント

pub mod file_viewer;
pub mod header;
pub mod invoice_form;
pub mod main_view;
pub mod po_details;
pub mod po_list;
