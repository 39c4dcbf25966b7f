pub mod client;
pub mod endpoint;
pub mod models;
pub mod operations;
pub mod query;

pub use client::DnsApiClient;
pub use models::{ApiResponse, Model};
pub use operations::Operation;
