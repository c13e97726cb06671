use std::fmt::Write as _;

use serde::Deserialize;
use sha2::{Digest, Sha256};
use url::Url;

use crate::{ArticleRecord, FailureKind, FetchError};

#[derive(Debug, Deserialize)]
struct HeadlinesResponse {
    status: String,
    #[serde(default)]
    articles: Vec<ArticleDto>,
}

#[derive(Debug, Deserialize)]
struct ArticleDto {
    #[serde(default)]
    source: SourceDto,
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    #[serde(rename = "urlToImage")]
    url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SourceDto {
    name: Option<String>,
}

/// Decodes a top-headlines response body into article records. Entries
/// without a usable title are skipped.
pub fn decode_headlines(body: &[u8]) -> Result<Vec<ArticleRecord>, FetchError> {
    let response: HeadlinesResponse = serde_json::from_slice(body)
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
    if response.status != "ok" {
        return Err(FetchError::new(
            FailureKind::Decode,
            format!("service status {}", response.status),
        ));
    }
    Ok(response.articles.into_iter().filter_map(into_record).collect())
}

fn into_record(dto: ArticleDto) -> Option<ArticleRecord> {
    let title = dto.title.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())?;
    let id = stable_identifier(dto.url.as_deref(), &title);
    let source_logo_url = dto.url.as_deref().and_then(source_logo_url);

    Some(ArticleRecord {
        id,
        title,
        summary: dto.description.filter(|d| !d.trim().is_empty()),
        url: dto.url,
        image_url: dto.url_to_image,
        source_name: dto.source.name,
        source_logo_url,
        published_at: dto.published_at,
    })
}

/// Stable per-article identifier: hex prefix of a SHA-256 over url + title.
fn stable_identifier(url: Option<&str>, title: &str) -> String {
    let mut hasher = Sha256::new();
    if let Some(url) = url {
        hasher.update(url.as_bytes());
    }
    hasher.update(title.as_bytes());
    let digest = hasher.finalize();

    let mut id = String::with_capacity(16);
    for byte in &digest[..8] {
        let _ = write!(id, "{byte:02x}");
    }
    id
}

/// The service carries no logo; derive one from the article's host.
fn source_logo_url(article_url: &str) -> Option<String> {
    let parsed = Url::parse(article_url).ok()?;
    let host = parsed.host_str()?;
    Some(format!("https://logo.clearbit.com/{host}"))
}
