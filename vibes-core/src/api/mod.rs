mod client;
mod error;
mod payloads;

pub use client::ApiClient;
pub use error::ApiError;
pub use payloads::{Suggestion, Track};
