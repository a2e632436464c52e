use crate::render::Renderer;
use anyhow::{Context as _, Result};
use tracing::warn;
use vibes_core::{ApiClient, ApiError, ColorExtractor, Config, SessionStore};

pub enum CliModeResult {
    Finish,
    NothingToDo,
}

/// What every mode needs: configuration, output and the session file.
pub struct Context {
    pub config: Config,
    pub renderer: Renderer,
    pub sessions: SessionStore,
}

impl Context {
    pub fn new(config: Config, renderer: Renderer) -> Self {
        let sessions = SessionStore::new(&config.session_file);
        Self {
            config,
            renderer,
            sessions,
        }
    }

    /// A client carrying the stored session, if any.
    pub fn client(&self) -> Result<ApiClient> {
        let session = self.sessions.load()?;
        let client = ApiClient::new(&self.config).context("could not set up the HTTP client")?;
        Ok(client.with_session(session))
    }

    pub fn extractor(&self) -> Result<ColorExtractor> {
        let extractor =
            ColorExtractor::from_config(&self.config).context("could not set up the HTTP client")?;
        Ok(extractor)
    }

    /// Forgets the stored session once the backend stops accepting it.
    pub fn checked<T>(&self, result: Result<T, ApiError>) -> Result<T> {
        match result {
            Err(ApiError::Unauthorized) => {
                warn!("clearing rejected session");
                self.sessions.clear()?;
                Err(ApiError::Unauthorized.into())
            }
            other => Ok(other?),
        }
    }
}
