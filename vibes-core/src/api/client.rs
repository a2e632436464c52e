use super::error::ApiError;
use super::payloads::{
    EntriesResponse, EntryResponse, ErrorBody, LoginRequest, LoginResponse,
    RecommendationsResponse, RegisterRequest, SearchResponse, Suggestion, Track,
};
use crate::config::Config;
use crate::entry::{EntriesResult, Entry, EntryId, NewEntry, map_entries};
use crate::session::Session;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

/// Talks to the journal backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Option<Session>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.http_timeout).build()?;
        Ok(Self::with_client(http, &config.api_base_url))
    }

    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session: None,
        }
    }

    pub fn with_session(mut self, session: Option<Session>) -> Self {
        self.session = session;
        self
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let session = self.session.as_ref().ok_or(ApiError::NoSession)?;
        Ok(builder.bearer_auth(&session.token))
    }

    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<(), ApiError> {
        let url = self.url("users/register");
        let body = RegisterRequest {
            username,
            email,
            password,
        };
        let response = send(&url, self.http.post(&url).json(&body)).await?;
        check(&url, response).await?;
        info!(username, "registered new account");
        Ok(())
    }

    /// Logs in and returns the session to persist. The client keeps using it.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Session, ApiError> {
        let url = self.url("users/login");
        let response = send(&url, self.http.post(&url).json(&LoginRequest { email, password })).await?;
        let login: LoginResponse = decode(&url, response).await?;
        let session = Session {
            user_id: EntryId::from(login.user.id).0,
            token: login.token,
            username: login.user.username,
            email: login.user.email,
        };
        info!(user = %session.username, "logged in");
        self.session = Some(session.clone());
        Ok(session)
    }

    /// All entries of the logged-in user, in backend order.
    pub async fn list_entries(&self) -> Result<EntriesResult, ApiError> {
        let url = self.url("users/userVibes");
        let response = send(&url, self.authorized(self.http.get(&url))?).await?;
        let body: EntriesResponse = decode(&url, response).await?;
        let result = map_entries(body.vibes);
        debug!(
            entries = result.entries.len(),
            skipped = result.errors.len(),
            "fetched entries"
        );
        Ok(result)
    }

    pub async fn get_entry(&self, id: &EntryId) -> Result<Entry, ApiError> {
        let url = self.url(&format!("users/vibes/{id}"));
        let response = send(&url, self.authorized(self.http.get(&url))?).await?;
        let body: EntryResponse = decode(&url, response).await?;
        Ok(Entry::try_from(body.vibe)?)
    }

    pub async fn create_entry(&self, entry: &NewEntry) -> Result<(), ApiError> {
        let url = self.url("users/vibes");
        let response = send(&url, self.authorized(self.http.post(&url).json(entry))?).await?;
        check(&url, response).await?;
        info!(title = %entry.song_title, "created entry");
        Ok(())
    }

    pub async fn delete_entry(&self, id: &EntryId) -> Result<(), ApiError> {
        let url = self.url(&format!("users/vibes/{id}"));
        let response = send(&url, self.authorized(self.http.delete(&url))?).await?;
        check(&url, response).await?;
        info!(entry = %id, "deleted entry");
        Ok(())
    }

    pub async fn search_tracks(&self, query: &str) -> Result<Vec<Track>, ApiError> {
        let url = self.url("users/spotify/search");
        let request = self.authorized(self.http.get(&url).query(&[("query", query)]))?;
        let body: SearchResponse = decode(&url, send(&url, request).await?).await?;
        Ok(body.tracks)
    }

    pub async fn recommendations(&self) -> Result<Vec<Suggestion>, ApiError> {
        let url = self.url("recommendations");
        let response = send(&url, self.authorized(self.http.get(&url))?).await?;
        let body: RecommendationsResponse = decode(&url, response).await?;
        Ok(body.results)
    }
}

async fn send(url: &str, request: RequestBuilder) -> Result<Response, ApiError> {
    debug!(url, "sending request");
    request.send().await.map_err(|source| ApiError::Network {
        url: url.to_string(),
        source,
    })
}

/// Turns non-2xx answers into errors.
async fn check(url: &str, response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
        warn!(url, %status, "request was not authorized");
        return Err(ApiError::Unauthorized);
    }
    let text = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        url: url.to_string(),
        status: status.as_u16(),
        message: error_message(&text, status),
    })
}

async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, ApiError> {
    check(url, response)
        .await?
        .json::<T>()
        .await
        .map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
}

fn error_message(body: &str, status: StatusCode) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.error;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status.canonical_reason().unwrap_or("request failed").to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::with_client(Client::new(), base)
    }

    fn session() -> Session {
        Session {
            user_id: "1".into(),
            token: "tok".into(),
            username: "ada".into(),
            email: "ada@example.com".into(),
        }
    }

    #[test]
    fn urls_are_joined_without_double_slashes() {
        let api = client("http://localhost:5000/");
        assert_eq!(api.base_url(), "http://localhost:5000");
        assert_eq!(api.url("users/login"), "http://localhost:5000/api/users/login");
        assert_eq!(api.url("/recommendations"), "http://localhost:5000/api/recommendations");
    }

    #[test]
    fn new_uses_configured_base_url() {
        let config = Config {
            api_base_url: "https://vibes.example.com".into(),
            ..Config::default()
        };
        let api = ApiClient::new(&config).unwrap();
        assert_eq!(api.url("users/userVibes"), "https://vibes.example.com/api/users/userVibes");
        assert!(api.session().is_none());
    }

    #[tokio::test]
    async fn authorized_calls_need_a_session() {
        let api = client("http://127.0.0.1:9");
        let err = api.list_entries().await.unwrap_err();
        assert!(matches!(err, ApiError::NoSession));
        let err = api.delete_entry(&EntryId::from("3")).await.unwrap_err();
        assert!(matches!(err, ApiError::NoSession));
    }

    #[test]
    fn bearer_token_is_attached() {
        let api = client("http://localhost:5000").with_session(Some(session()));
        let request = api
            .authorized(api.http.get(api.url("users/userVibes")))
            .unwrap()
            .build()
            .unwrap();
        let header = request.headers().get(reqwest::header::AUTHORIZATION).unwrap();
        assert_eq!(header.to_str().unwrap(), "Bearer tok");
    }

    #[test]
    fn error_message_prefers_json_body() {
        assert_eq!(
            error_message(r#"{"error":"Email already in use"}"#, StatusCode::BAD_REQUEST),
            "Email already in use"
        );
        assert_eq!(error_message("  boom ", StatusCode::INTERNAL_SERVER_ERROR), "boom");
        assert_eq!(error_message("", StatusCode::NOT_FOUND), "Not Found");
    }
}
