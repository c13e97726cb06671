//! Runs the core's effects against the engine and the platform, and maps
//! engine events back into core messages.

use std::path::PathBuf;

use feed_logging::{feed_debug, feed_warn};
use newsdesk_core::{Article, Effect, ImageKind, Msg};
use newsdesk_engine::{ArticleRecord, EngineEvent, EngineHandle, FailureKind, PixelSize};
use url::Url;

use crate::images::ImageStore;
use crate::persistence;

/// Effects the console front end itself must act on.
pub enum UiAction {
    Alert(String),
    ScrollToTop,
    EndRefreshing,
}

pub struct EffectRunner {
    engine: EngineHandle,
    settings_path: PathBuf,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, settings_path: PathBuf) -> Self {
        Self {
            engine,
            settings_path,
        }
    }

    pub fn run(&self, effects: Vec<Effect>) -> Vec<UiAction> {
        let mut actions = Vec::new();
        for effect in effects {
            match effect {
                Effect::FetchArticles { fetch_id, category } => {
                    feed_debug!(
                        "FetchArticles id={} category={}",
                        fetch_id,
                        category.as_str()
                    );
                    self.engine.fetch_articles(fetch_id, category.as_str());
                }
                Effect::FetchImage {
                    slot,
                    article_id,
                    kind,
                    url,
                    size,
                } => {
                    self.engine.fetch_image(
                        slot,
                        article_id,
                        kind_to_engine(kind),
                        url.as_str(),
                        PixelSize::new(size.width, size.height),
                    );
                }
                Effect::ScrollToTop => actions.push(UiAction::ScrollToTop),
                Effect::EndRefreshing => actions.push(UiAction::EndRefreshing),
                Effect::PresentAlert { message } => actions.push(UiAction::Alert(message)),
                Effect::OpenArticle { url } => {
                    if let Err(err) = open::that(url.as_str()) {
                        feed_warn!("Could not open {}: {}", url, err);
                    }
                }
                Effect::PersistSettings { settings } => {
                    persistence::save_settings(&self.settings_path, settings);
                }
            }
        }
        actions
    }
}

/// Translates one engine event into a core message. Cancelled fetches are
/// dropped: their fetch id is already superseded.
pub fn map_event(event: EngineEvent, images: &mut ImageStore) -> Option<Msg> {
    match event {
        EngineEvent::ArticlesFetched { fetch_id, result } => match result {
            Ok(records) => Some(Msg::ArticlesLoaded {
                fetch_id,
                articles: Some(records.into_iter().map(to_article).collect()),
            }),
            Err(err) => match err.kind {
                FailureKind::Cancelled => {
                    feed_debug!("fetch {} cancelled", fetch_id);
                    None
                }
                FailureKind::Configuration => {
                    feed_warn!("load aborted: {}", err);
                    Some(Msg::LoadAborted { fetch_id })
                }
                _ => {
                    feed_warn!("fetch {} failed: {}", fetch_id, err);
                    Some(Msg::ArticlesLoaded {
                        fetch_id,
                        articles: None,
                    })
                }
            },
        },
        EngineEvent::ImageFetched {
            slot,
            article_id,
            kind,
            image,
        } => {
            let token = image.map(|bytes| images.register(bytes));
            Some(Msg::ImageLoaded {
                slot,
                article_id,
                kind: kind_from_engine(kind),
                image: token,
            })
        }
    }
}

fn to_article(record: ArticleRecord) -> Article {
    Article {
        id: record.id,
        title: record.title,
        summary: record.summary,
        url: parse_url(record.url.as_deref()),
        image_url: parse_url(record.image_url.as_deref()),
        source_name: record.source_name,
        source_logo_url: parse_url(record.source_logo_url.as_deref()),
        published_at: record.published_at,
    }
}

fn parse_url(raw: Option<&str>) -> Option<Url> {
    raw.and_then(|candidate| Url::parse(candidate).ok())
}

fn kind_to_engine(kind: ImageKind) -> newsdesk_engine::ImageKind {
    match kind {
        ImageKind::Article => newsdesk_engine::ImageKind::Article,
        ImageKind::SourceLogo => newsdesk_engine::ImageKind::SourceLogo,
    }
}

fn kind_from_engine(kind: newsdesk_engine::ImageKind) -> ImageKind {
    match kind {
        newsdesk_engine::ImageKind::Article => ImageKind::Article,
        newsdesk_engine::ImageKind::SourceLogo => ImageKind::SourceLogo,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ArticleRecord {
        ArticleRecord {
            id: "abc123".to_string(),
            title: "Headline".to_string(),
            summary: Some("Summary".to_string()),
            url: Some("https://example.com/story".to_string()),
            image_url: Some("not a url".to_string()),
            source_name: Some("Example Wire".to_string()),
            source_logo_url: None,
            published_at: Some("2024-05-01T10:00:00Z".to_string()),
        }
    }

    #[test]
    fn records_map_to_articles_with_parsed_urls() {
        let article = to_article(record());

        assert_eq!(article.id, "abc123");
        assert_eq!(
            article.url.as_ref().map(Url::as_str),
            Some("https://example.com/story")
        );
        // Unparsable URLs degrade to absence, not errors.
        assert_eq!(article.image_url, None);
    }

    #[test]
    fn failed_image_event_carries_no_token() {
        let mut images = ImageStore::new();
        let msg = map_event(
            EngineEvent::ImageFetched {
                slot: 1,
                article_id: "abc123".to_string(),
                kind: newsdesk_engine::ImageKind::Article,
                image: None,
            },
            &mut images,
        );

        assert_eq!(
            msg,
            Some(Msg::ImageLoaded {
                slot: 1,
                article_id: "abc123".to_string(),
                kind: ImageKind::Article,
                image: None,
            })
        );
    }
}
