use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use tokio_util::sync::CancellationToken;

use crate::fetch::{ApiSettings, ArticleSource, NewsApiClient};
use crate::image::{ImageLoader, ImageSettings};
use crate::{EngineEvent, FailureKind, FetchError, FetchId, ImageKind, PixelSize, SlotId};

#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub api: ApiSettings,
    pub images: ImageSettings,
}

enum EngineCommand {
    FetchArticles {
        fetch_id: FetchId,
        category: String,
    },
    FetchImage {
        slot: SlotId,
        article_id: String,
        kind: ImageKind,
        url: String,
        size: PixelSize,
    },
}

/// Bridge between the synchronous driver and the async IO world: commands
/// in over a channel, events polled back out with `try_recv`.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let source = Arc::new(NewsApiClient::new(config.api));
        let loader = Arc::new(ImageLoader::new(config.images));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            // Only one article fetch is logically current; a newer one
            // cancels whatever is still in flight.
            let mut current_fetch: Option<CancellationToken> = None;

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::FetchArticles { fetch_id, category } => {
                        if let Some(token) = current_fetch.take() {
                            token.cancel();
                        }
                        let token = CancellationToken::new();
                        current_fetch = Some(token.clone());

                        let source = source.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let result = tokio::select! {
                                _ = token.cancelled() => Err(FetchError::new(
                                    FailureKind::Cancelled,
                                    "superseded by a newer fetch",
                                )),
                                result = source.top_headlines(&category) => result,
                            };
                            let _ = event_tx.send(EngineEvent::ArticlesFetched { fetch_id, result });
                        });
                    }
                    EngineCommand::FetchImage {
                        slot,
                        article_id,
                        kind,
                        url,
                        size,
                    } => {
                        let loader = loader.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let image = loader.get(&url, size).await;
                            let _ = event_tx.send(EngineEvent::ImageFetched {
                                slot,
                                article_id,
                                kind,
                                image,
                            });
                        });
                    }
                }
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn fetch_articles(&self, fetch_id: FetchId, category: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::FetchArticles {
            fetch_id,
            category: category.into(),
        });
    }

    pub fn fetch_image(
        &self,
        slot: SlotId,
        article_id: impl Into<String>,
        kind: ImageKind,
        url: impl Into<String>,
        size: PixelSize,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::FetchImage {
            slot,
            article_id: article_id.into(),
            kind,
            url: url.into(),
            size,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().expect("engine event lock").try_recv().ok()
    }
}
