pub mod client;
pub mod payloads;

pub use client::ApiClient;
