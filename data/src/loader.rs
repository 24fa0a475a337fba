use std::fmt;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use reqwest::header::{self, HeaderValue};
use serde::Deserialize;
use tokio::fs;
use url::Url;

use crate::card::{self, Card};
use crate::config;

/// Where the card document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Remote(Url),
    Local(PathBuf),
}

impl Source {
    pub fn parse(source: &str) -> Self {
        let source = source.trim();

        match Url::parse(source) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                Source::Remote(url)
            }
            Ok(url) if url.scheme() == "file" => match url.to_file_path() {
                Ok(path) => Source::Local(path),
                Err(()) => Source::Local(PathBuf::from(url.path())),
            },
            _ => Source::Local(PathBuf::from(source)),
        }
    }
}

impl FromStr for Source {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Source::parse(s))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Remote(url) => write!(f, "{url}"),
            Source::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Loads the cards at `source`, falling back to the sample cards on any
/// failure. Makes a single attempt.
pub async fn load(
    source: &Source,
    client: &reqwest::Client,
    config: &config::Request,
) -> Vec<Card> {
    match fetch(source, client, config).await {
        Ok(cards) => {
            log::info!("loaded {} cards from {source}", cards.len());
            cards
        }
        Err(error) => {
            log::error!("error loading cards from {source}: {error}");

            let cards = card::fallback::cards();
            log::info!("using {} fallback cards", cards.len());
            cards
        }
    }
}

pub async fn fetch(
    source: &Source,
    client: &reqwest::Client,
    config: &config::Request,
) -> Result<Vec<Card>, LoadError> {
    log::trace!("fetching cards from {source}");

    let bytes = match source {
        Source::Remote(url) => {
            let mut req = client.get(url.clone());

            if let Some(timeout) = config.timeout() {
                req = req.timeout(timeout);
            }

            if let Ok(user_agent) = HeaderValue::from_str(&config.user_agent)
            {
                req = req.header(header::USER_AGENT, user_agent);
            }

            let resp = req.send().await?.error_for_status()?;

            resp.bytes().await?.to_vec()
        }
        Source::Local(path) => fs::read(path).await?,
    };

    parse(&bytes)
}

/// Parses a `{ "cards": [...] }` document.
pub fn parse(bytes: &[u8]) -> Result<Vec<Card>, LoadError> {
    #[derive(Deserialize)]
    struct Document {
        cards: Vec<Card>,
    }

    let Document { cards } = serde_json::from_slice(bytes)?;

    Ok(cards)
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid card document: {0}")]
    Parse(#[from] serde_json::Error),
}
