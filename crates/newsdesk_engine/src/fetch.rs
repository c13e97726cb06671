use std::time::Duration;

use feed_logging::feed_debug;
use url::Url;

use crate::decode::decode_headlines;
use crate::types::map_reqwest_error;
use crate::{ArticleRecord, FailureKind, FetchError};

/// Connection and endpoint settings for the headlines service.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub country: String,
    pub page_size: u32,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://newsapi.org/v2".to_string(),
            api_key: None,
            country: "us".to_string(),
            page_size: 50,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ApiSettings {
    /// Defaults plus the API key from `NEWSDESK_API_KEY`, if set.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("NEWSDESK_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            ..Self::default()
        }
    }

    /// Builds the top-headlines URL for a category. A missing API key or an
    /// unparsable base URL is a configuration failure, not a network one.
    pub fn url_for_category(&self, category: &str) -> Result<Url, FetchError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(FetchError::new(
                FailureKind::Configuration,
                "no API key configured",
            ));
        };

        let mut url = Url::parse(&format!("{}/top-headlines", self.base_url))
            .map_err(|err| FetchError::new(FailureKind::Configuration, err.to_string()))?;
        url.query_pairs_mut()
            .append_pair("country", &self.country)
            .append_pair("category", category)
            .append_pair("pageSize", &self.page_size.to_string())
            .append_pair("apiKey", api_key);
        Ok(url)
    }
}

/// Seam for the article-fetch collaborator.
#[async_trait::async_trait]
pub trait ArticleSource: Send + Sync {
    async fn top_headlines(&self, category: &str) -> Result<Vec<ArticleRecord>, FetchError>;
}

/// Reqwest-backed headlines client.
#[derive(Debug, Clone)]
pub struct NewsApiClient {
    settings: ApiSettings,
}

impl NewsApiClient {
    pub fn new(settings: ApiSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl ArticleSource for NewsApiClient {
    async fn top_headlines(&self, category: &str) -> Result<Vec<ArticleRecord>, FetchError> {
        // The URL carries the API key; log the category only.
        let url = self.settings.url_for_category(category)?;
        feed_debug!("requesting headlines for category {}", category);

        let client = self.build_client()?;
        let response = client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let records = decode_headlines(&body)?;
        feed_debug!(
            "decoded {} headlines for category {}",
            records.len(),
            category
        );
        Ok(records)
    }
}
