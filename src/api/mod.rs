//! Analysis service API module
//! Wire types and HTTP client for the remote optimization service

pub mod client;
pub mod response;

pub use client::ApiClient;
pub use response::OptimizeResponse;
