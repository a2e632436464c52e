use crate::entry::EntryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not logged in, run `vibes login` first")]
    NoSession,
    /// The backend rejected the token (401/403). The stored session is stale.
    #[error("session expired or not authorized, log in again")]
    Unauthorized,
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered {status}: {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },
    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error(transparent)]
    MalformedEntry(#[from] EntryError),
}
