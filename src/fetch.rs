use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::FetchError;
use crate::quiz::{parse_question_set, QuestionRecord};

/// Where the question sheet comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    Url(String),
    File(PathBuf),
}

impl QuestionSource {
    /// `http://` and `https://` are URLs; `file://` and everything else is a path.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.starts_with("http://") || s.starts_with("https://") {
            QuestionSource::Url(s.to_string())
        } else if let Some(path) = s.strip_prefix("file://") {
            QuestionSource::File(PathBuf::from(path))
        } else {
            QuestionSource::File(PathBuf::from(s))
        }
    }
}

impl fmt::Display for QuestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionSource::Url(url) => write!(f, "{}", url),
            QuestionSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Install the ring crypto provider for rustls (required for rustls 0.23+).
/// Safe to call more than once; later calls are no-ops.
pub fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

/// HTTP client used for every question fetch
pub fn build_client() -> Result<reqwest::Client, FetchError> {
    install_crypto_provider();
    let client = reqwest::Client::builder()
        .user_agent(concat!("typequiz/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Fetch the raw CSV text. One attempt, no retries.
pub async fn fetch_question_text(
    client: &reqwest::Client,
    source: &QuestionSource,
    timeout: Duration,
) -> Result<String, FetchError> {
    match source {
        QuestionSource::Url(url) => {
            debug!(%url, "fetching question sheet");
            match tokio::time::timeout(timeout, get_text(client, url)).await {
                Ok(result) => result,
                Err(_elapsed) => {
                    warn!(%url, ?timeout, "question fetch timed out");
                    Err(FetchError::Timeout(timeout))
                }
            }
        }
        QuestionSource::File(path) => {
            debug!(path = %path.display(), "reading question file");
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| FetchError::Io {
                    path: path.clone(),
                    source,
                })
        }
    }
}

async fn get_text(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        warn!(%url, status = status.as_u16(), "question fetch rejected");
        return Err(FetchError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    Ok(response.text().await?)
}

/// Fetch and parse the question set. On failure nothing is returned but the error.
///
/// Called from main.rs for the CLI subcommands and from the TUI event loop
/// for the initial load and every retry.
pub async fn load_questions(
    client: &reqwest::Client,
    source: &QuestionSource,
    timeout: Duration,
) -> Result<Vec<QuestionRecord>, FetchError> {
    let text = fetch_question_text(client, source, timeout).await?;
    let questions = parse_question_set(&text);
    info!(count = questions.len(), %source, "loaded questions");
    Ok(questions)
}
