//! POサービスAPI呼び出し

pub mod po_service;
