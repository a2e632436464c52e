use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not download {reference}: {source}")]
    Http {
        reference: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{reference} answered with status {status}")]
    Status { reference: String, status: u16 },
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where cover art bytes come from.
///
/// A fetch has exactly two outcomes: the encoded image bytes, or an error.
pub trait ImageSource: Send + Sync {
    fn fetch(&self, reference: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

/// Downloads `http(s)://` references and reads everything else from disk
/// (`file://` URLs or plain paths).
#[derive(Debug, Clone)]
pub struct DefaultImageSource {
    http: reqwest::Client,
}

impl DefaultImageSource {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let http_error = |source: reqwest::Error| FetchError::Http {
            reference: url.to_string(),
            source,
        };
        let response = self.http.get(url).send().await.map_err(http_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                reference: url.to_string(),
                status: status.as_u16(),
            });
        }
        let bytes = response.bytes().await.map_err(http_error)?;
        Ok(bytes.to_vec())
    }
}

impl ImageSource for DefaultImageSource {
    async fn fetch(&self, reference: &str) -> Result<Vec<u8>, FetchError> {
        match classify(reference) {
            Reference::Remote(url) => {
                debug!(url, "downloading cover art");
                self.download(url).await
            }
            Reference::Local(path) => tokio::fs::read(&path)
                .await
                .map_err(|source| FetchError::Io { path, source }),
        }
    }
}

#[derive(Debug, PartialEq)]
enum Reference<'a> {
    Remote(&'a str),
    Local(PathBuf),
}

fn classify(reference: &str) -> Reference<'_> {
    let trimmed = reference.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Reference::Remote(trimmed)
    } else if let Some(path) = trimmed.strip_prefix("file://") {
        Reference::Local(PathBuf::from(path))
    } else {
        Reference::Local(PathBuf::from(trimmed))
    }
}
