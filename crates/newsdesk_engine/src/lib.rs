//! Newsdesk engine: article and image IO behind the feed's effect boundary.
mod decode;
mod engine;
mod fetch;
mod image;
mod types;

pub use decode::decode_headlines;
pub use engine::{EngineConfig, EngineHandle};
pub use fetch::{ApiSettings, ArticleSource, NewsApiClient};
pub use image::{ImageLoader, ImageSettings};
pub use types::{
    ArticleRecord, EngineEvent, FailureKind, FetchError, FetchId, ImageKind, PixelSize, SlotId,
};
