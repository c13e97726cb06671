use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::Duration;

use bytes::Bytes;
use feed_logging::{feed_trace, feed_warn};
use futures_util::StreamExt;
use lru::LruCache;
use reqwest::header::CONTENT_TYPE;

use crate::types::map_reqwest_error;
use crate::{FailureKind, FetchError, PixelSize};

#[derive(Debug, Clone)]
pub struct ImageSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
    pub cache_capacity: NonZeroUsize,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 2 * 1024 * 1024,
            cache_capacity: NonZeroUsize::new(128).expect("nonzero capacity"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ImageKey {
    url: String,
    size: PixelSize,
}

/// Downloads and caches image bytes.
///
/// Failures of any kind resolve to `None`; the requesting slot keeps its
/// placeholder. Staleness is not this component's concern: delivery back to
/// a slot is guarded by the article identifier in the core.
pub struct ImageLoader {
    settings: ImageSettings,
    cache: Mutex<LruCache<ImageKey, Bytes>>,
}

impl ImageLoader {
    pub fn new(settings: ImageSettings) -> Self {
        let cache = Mutex::new(LruCache::new(settings.cache_capacity));
        Self { settings, cache }
    }

    /// Fetches the image at `url`, keyed by `(url, size)` so each template's
    /// rendition caches independently. Served from cache when possible.
    pub async fn get(&self, url: &str, size: PixelSize) -> Option<Bytes> {
        let key = ImageKey {
            url: url.to_string(),
            size,
        };
        if let Some(bytes) = self.cache.lock().expect("image cache lock").get(&key) {
            feed_trace!("image cache hit for {}", url);
            return Some(bytes.clone());
        }

        match self.fetch(url).await {
            Ok(bytes) => {
                self.cache
                    .lock()
                    .expect("image cache lock")
                    .put(key, bytes.clone());
                Some(bytes)
            }
            Err(err) => {
                feed_warn!("image fetch failed for {}: {}", url, err);
                None
            }
        }
    }

    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let client = reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;

        let response = client.get(parsed).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        if let Some(content_type) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
        {
            let ct = content_type
                .split(';')
                .next()
                .unwrap_or(content_type)
                .trim();
            if !ct.eq_ignore_ascii_case("application/octet-stream")
                && !ct.to_ascii_lowercase().starts_with("image/")
            {
                return Err(FetchError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "unsupported content type",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        Ok(Bytes::from(bytes))
    }
}
