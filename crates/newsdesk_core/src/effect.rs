use url::Url;

use crate::{ArticleId, Category, FetchId, ImageKind, ImageSize, Settings, SlotId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the article service for the current category's headlines.
    FetchArticles { fetch_id: FetchId, category: Category },
    /// Ask the image loader for an image addressed to a slot.
    FetchImage {
        slot: SlotId,
        article_id: ArticleId,
        kind: ImageKind,
        url: Url,
        size: ImageSize,
    },
    /// Reset the grid's scroll position to the first item.
    ScrollToTop,
    /// Stop the pull-to-refresh indicator if it is spinning.
    EndRefreshing,
    /// Surface a one-button alert.
    PresentAlert { message: String },
    /// Open an article's destination URL in the embedded browser.
    OpenArticle { url: Url },
    /// Save the current selections at the controller boundary.
    PersistSettings { settings: Settings },
}
