// Adapters layer: concrete implementations for external systems (http, history files).

pub mod history;
pub mod http;

pub use http::OpenAiCompatibleClient;
