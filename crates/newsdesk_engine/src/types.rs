use bytes::Bytes;
use thiserror::Error;

pub type FetchId = u64;
pub type SlotId = u32;

/// Which of a cell's image slots a fetch addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Article,
    SourceLogo,
}

/// Requested pixel size for an image; part of the cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// One decoded headline as returned by the article service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    /// Stable hex digest of the article's url and title.
    pub id: String,
    pub title: String,
    pub summary: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub source_name: Option<String>,
    pub source_logo_url: Option<String>,
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ArticlesFetched {
        fetch_id: FetchId,
        result: Result<Vec<ArticleRecord>, FetchError>,
    },
    ImageFetched {
        slot: SlotId,
        article_id: String,
        kind: ImageKind,
        image: Option<Bytes>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureKind {
    /// No fetchable URL could be built for the category (e.g. missing key).
    #[error("configuration error")]
    Configuration,
    #[error("invalid url")]
    InvalidUrl,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("response too large (max {max_bytes}, actual {actual:?})")]
    TooLarge { max_bytes: u64, actual: Option<u64> },
    #[error("unsupported content type {content_type}")]
    UnsupportedContentType { content_type: String },
    #[error("decode error")]
    Decode,
    #[error("cancelled")]
    Cancelled,
    #[error("network error")]
    Network,
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
