//! Request and response bodies of the backend.
use crate::entry::{EntryId, RawEntry, RawId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginUser {
    pub id: RawId,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EntriesResponse {
    #[serde(default)]
    pub vibes: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EntryResponse {
    pub vibe: RawEntry,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub tracks: Vec<Track>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationsResponse {
    #[serde(default)]
    pub results: Vec<Suggestion>,
}

/// Error body the backend sends along with non-2xx answers.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(alias = "message")]
    pub error: String,
}

/// A song found through the streaming provider's search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub id: Option<RawId>,
    pub title: String,
    pub artist: String,
    pub image: Option<String>,
    pub spotify_url: Option<String>,
}

/// A recommended song with the reason it was picked.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Suggestion {
    pub id: RawId,
    pub title: String,
    pub artist: String,
    pub image: Option<String>,
    pub preview_url: Option<String>,
    #[serde(default)]
    pub reason: String,
}

impl Suggestion {
    pub fn entry_id(&self) -> EntryId {
        self.id.clone().into()
    }
}
