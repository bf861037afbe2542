// Adapters layer: concrete implementations for external systems (storage, http, html pages).

pub mod html;
pub mod http;
pub mod storage;
