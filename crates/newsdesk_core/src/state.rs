use std::collections::BTreeMap;

use crate::view_model::FeedViewModel;
use crate::{Article, ArticleId, Category, ImageKind, Style};

/// Generation counter correlating an article fetch with the load that
/// issued it. Completions carrying a stale id are discarded.
pub type FetchId = u64;

/// Identifier of a reusable visual slot in the article grid.
pub type SlotId = u32;

/// Opaque handle to decoded image data owned by the rendering layer.
pub type ImageToken = u64;

/// The pair of current selections. Process-wide UI state, mutated only by
/// explicit user selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub category: Category,
    pub style: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LoadPhase {
    #[default]
    Idle,
    Loading {
        fetch_id: FetchId,
    },
}

/// What a reusable slot currently displays: the article it is bound to and
/// any image tokens applied so far. `None` means placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotBinding {
    pub article_id: ArticleId,
    pub image: Option<ImageToken>,
    pub source_logo: Option<ImageToken>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedState {
    settings: Settings,
    articles: Vec<Article>,
    phase: LoadPhase,
    fetch_seq: FetchId,
    slots: BTreeMap<SlotId, SlotBinding>,
    dirty: bool,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from previously saved selections (e.g. restored at launch).
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading { .. })
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    /// The binding for a slot, if the rendering surface has bound one.
    pub fn slot(&self, slot: SlotId) -> Option<&SlotBinding> {
        self.slots.get(&slot)
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> FeedViewModel {
        FeedViewModel::project(self)
    }

    pub(crate) fn article(&self, index: usize) -> Option<&Article> {
        self.articles.get(index)
    }

    pub(crate) fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub(crate) fn current_fetch(&self) -> Option<FetchId> {
        match self.phase {
            LoadPhase::Loading { fetch_id } => Some(fetch_id),
            LoadPhase::Idle => None,
        }
    }

    /// Enters Loading: clears the visible list and slot bindings, allocates
    /// a fresh fetch id.
    pub(crate) fn begin_load(&mut self) -> FetchId {
        self.fetch_seq += 1;
        let fetch_id = self.fetch_seq;
        self.phase = LoadPhase::Loading { fetch_id };
        self.articles.clear();
        self.slots.clear();
        self.dirty = true;
        fetch_id
    }

    pub(crate) fn finish_load(&mut self) {
        self.phase = LoadPhase::Idle;
        self.dirty = true;
    }

    /// Replaces the store wholesale with a freshly fetched list.
    pub(crate) fn set_articles(&mut self, articles: Vec<Article>) {
        self.articles = articles;
        self.slots.clear();
        self.dirty = true;
    }

    pub(crate) fn set_category(&mut self, category: Category) {
        self.settings.category = category;
        self.dirty = true;
    }

    pub(crate) fn set_style(&mut self, style: Style) {
        self.settings.style = style;
        // Every cell re-dequeues under the new template, so bindings restart
        // empty and images reload at the new template's size.
        self.slots.clear();
        self.dirty = true;
    }

    /// Binds a slot to an article, discarding whatever it showed before.
    pub(crate) fn bind_slot(&mut self, slot: SlotId, article_id: ArticleId) {
        self.slots.insert(
            slot,
            SlotBinding {
                article_id,
                image: None,
                source_logo: None,
            },
        );
        self.dirty = true;
    }

    /// Applies a delivered image token iff the slot still displays the
    /// article that requested it. A mismatch mutates nothing.
    pub(crate) fn apply_image(
        &mut self,
        slot: SlotId,
        article_id: &str,
        kind: ImageKind,
        token: Option<ImageToken>,
    ) {
        let Some(binding) = self.slots.get_mut(&slot) else {
            return;
        };
        if binding.article_id != article_id {
            return;
        }
        let Some(token) = token else {
            return;
        };
        let target = match kind {
            ImageKind::Article => &mut binding.image,
            ImageKind::SourceLogo => &mut binding.source_logo,
        };
        if *target != Some(token) {
            *target = Some(token);
            self.dirty = true;
        }
    }
}
