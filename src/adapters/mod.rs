// Adapters layer: concrete implementations for external systems (GitHub, HTTP, local files).

pub mod github;
pub mod http;
pub mod storage;
