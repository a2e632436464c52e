use crate::color::{DEFAULT_CONCURRENCY, DEFAULT_SAMPLE_SIZE};
use crate::organizer::{GroupOrder, SortKey, TagMatch};
use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf, time::Duration};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone)]
pub struct Config {
    /// Backend root, e.g. `http://localhost:5000`.
    pub api_base_url: String,
    /// Where the logged-in session is kept between runs.
    pub session_file: PathBuf,
    /// Entry order used by `list` when `--sort` is not given.
    pub default_sort: SortKey,
    /// `exact` compares against the split tag list, `substring` searches the raw tag string.
    pub tag_match: TagMatch,
    pub group_order: GroupOrder,
    /// chrono format for entry dates in listings. Default is `%B %-d, %Y` (March 5, 2024).
    pub date_format: String,
    pub color_sample_size: u32,
    pub color_concurrency: usize,
    pub http_timeout: Duration,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    api_base_url: Option<String>,
    session_file: Option<PathBuf>,
    default_sort: Option<SortKey>,
    tag_match: Option<TagMatch>,
    group_order: Option<GroupOrder>,
    date_format: Option<String>,
    color_sample_size: Option<u32>,
    color_concurrency: Option<usize>,
    http_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file_config(FileConfig::default())
    }
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native)
    /// and apply defaults for anything missing.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config()?;
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        Self {
            api_base_url: file_config
                .api_base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            session_file: file_config
                .session_file
                .unwrap_or_else(Self::default_session_file),
            default_sort: file_config.default_sort.unwrap_or_default(),
            tag_match: file_config.tag_match.unwrap_or_default(),
            group_order: file_config.group_order.unwrap_or_default(),
            date_format: file_config
                .date_format
                .unwrap_or_else(|| "%B %-d, %Y".to_string()),
            color_sample_size: file_config
                .color_sample_size
                .unwrap_or(DEFAULT_SAMPLE_SIZE)
                .max(1),
            color_concurrency: file_config
                .color_concurrency
                .unwrap_or(DEFAULT_CONCURRENCY)
                .max(1),
            http_timeout: Duration::from_secs(file_config.http_timeout_secs.unwrap_or(30)),
        }
    }

    /// Default session file: `{data_dir}/vibes/session.json`
    /// - macOS:   `~/Library/Application Support/vibes/session.json`
    /// - Linux:   `$XDG_DATA_HOME/vibes/session.json` or `~/.local/share/vibes/session.json`
    /// - Windows: `%APPDATA%\vibes\session.json`
    fn default_session_file() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            base.data_dir().join("vibes").join("session.json")
        } else {
            PathBuf::from("./vibes/session.json")
        }
    }

    /// Candidate config files, in lookup order.
    pub fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join("vibes").join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("vibes").join("config.toml");
            if !v.contains(&native) {
                v.push(native);
            }
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
