// Adapters layer: concrete implementations for external systems (http rate service).

pub mod http;

pub use http::HttpRateProvider;
