use crate::{Article, ArticleId, FetchId, ImageToken, SlotId};

/// Which of a cell's two image slots a fetch result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Article,
    SourceLogo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Screen became visible for the first time; load the current category.
    ScreenAppeared,
    /// Pull-to-refresh gesture; reload the current category.
    RefreshPulled,
    /// A chip in the category strip was tapped.
    CategoryChipTapped { index: usize },
    /// A category was selected by raw name (e.g. from an external picker).
    CategoryPicked { name: String },
    /// A style was selected by raw name from the style action sheet.
    StylePicked { name: String },
    /// An article row was tapped.
    ArticleTapped { index: usize },
    /// Article fetch completed. `None` signals failure.
    ArticlesLoaded {
        fetch_id: FetchId,
        articles: Option<Vec<Article>>,
    },
    /// Article fetch aborted before a request could be issued
    /// (unresolvable category URL).
    LoadAborted { fetch_id: FetchId },
    /// The rendering surface bound a reusable slot to the article at `index`.
    SlotDisplayed { slot: SlotId, index: usize },
    /// Image fetch completed for a slot. `None` signals failure; the slot
    /// keeps its placeholder.
    ImageLoaded {
        slot: SlotId,
        article_id: ArticleId,
        kind: ImageKind,
        image: Option<ImageToken>,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
