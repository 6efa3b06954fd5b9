use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use grammar_core::model::Rule;
use reqwest::Client;
use url::Url;

use crate::error::{LoadError, LocationError};

/// File the rules are expected in when nothing else is configured.
pub const DEFAULT_RULES_FILE: &str = "120_Grammar_Rules.json";

/// Where the rules document lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleLocation {
    Http(Url),
    File(PathBuf),
}

impl RuleLocation {
    /// Parse a user-supplied location.
    ///
    /// `http(s)://` URLs are fetched over the network, `file://` URLs and
    /// anything that is not a URL are read from disk.
    ///
    /// # Errors
    ///
    /// Returns `LocationError` for empty input, non-HTTP URL schemes, or
    /// `file://` URLs that do not map to a local path.
    pub fn parse(raw: &str) -> Result<Self, LocationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LocationError::Empty);
        }

        let Ok(url) = Url::parse(trimmed) else {
            return Ok(Self::File(PathBuf::from(trimmed)));
        };

        match url.scheme() {
            "http" | "https" => Ok(Self::Http(url)),
            "file" => url
                .to_file_path()
                .map(Self::File)
                .map_err(|()| LocationError::InvalidFileUrl(trimmed.to_string())),
            // Windows drive letters parse as a one-letter scheme.
            scheme if scheme.len() == 1 => Ok(Self::File(PathBuf::from(trimmed))),
            scheme => Err(LocationError::UnsupportedScheme(scheme.to_string())),
        }
    }

    /// Last path component, used when telling the user which file is missing.
    #[must_use]
    pub fn file_name(&self) -> String {
        let name = match self {
            Self::Http(url) => url
                .path_segments()
                .and_then(Iterator::last)
                .filter(|segment| !segment.is_empty())
                .map(str::to_string),
            Self::File(path) => path
                .file_name()
                .and_then(|name| name.to_str())
                .map(str::to_string),
        };
        name.unwrap_or_else(|| DEFAULT_RULES_FILE.to_string())
    }

    /// Build the source that reads from this location.
    #[must_use]
    pub fn into_source(self) -> Arc<dyn RuleSource> {
        match self {
            Self::Http(url) => Arc::new(HttpRuleSource::new(url)),
            Self::File(path) => Arc::new(FileRuleSource::new(path)),
        }
    }
}

impl Default for RuleLocation {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_RULES_FILE))
    }
}

impl FromStr for RuleLocation {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RuleLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Anything that can produce the raw rule sequence.
#[async_trait]
pub trait RuleSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Rule>, LoadError>;

    fn file_name(&self) -> String {
        DEFAULT_RULES_FILE.to_string()
    }
}

pub(crate) fn parse_rules(bytes: &[u8]) -> Result<Vec<Rule>, LoadError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Fetches the rules document with a single GET request.
#[derive(Clone, Debug)]
pub struct HttpRuleSource {
    client: Client,
    url: Url,
}

impl HttpRuleSource {
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self::with_client(Client::new(), url)
    }

    #[must_use]
    pub fn with_client(client: Client, url: Url) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl RuleSource for HttpRuleSource {
    async fn fetch(&self) -> Result<Vec<Rule>, LoadError> {
        let response = self.client.get(self.url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(LoadError::Status(response.status()));
        }

        let body = response.bytes().await?;
        parse_rules(&body)
    }

    fn file_name(&self) -> String {
        RuleLocation::Http(self.url.clone()).file_name()
    }
}

/// Reads the rules document from the local filesystem.
#[derive(Clone, Debug)]
pub struct FileRuleSource {
    path: PathBuf,
}

impl FileRuleSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RuleSource for FileRuleSource {
    async fn fetch(&self) -> Result<Vec<Rule>, LoadError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        parse_rules(&bytes)
    }

    fn file_name(&self) -> String {
        RuleLocation::File(self.path.clone()).file_name()
    }
}

/// Rules held in memory.
#[derive(Clone, Debug, Default)]
pub struct StaticRuleSource {
    rules: Vec<Rule>,
}

impl StaticRuleSource {
    #[must_use]
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

#[async_trait]
impl RuleSource for StaticRuleSource {
    async fn fetch(&self) -> Result<Vec<Rule>, LoadError> {
        Ok(self.rules.clone())
    }
}
