//! Newsdesk core: pure feed state machine and view-model helpers.
mod article;
mod effect;
mod msg;
mod state;
mod style;
mod update;
mod view_model;

pub use article::{Article, ArticleId, Category};
pub use effect::Effect;
pub use msg::{ImageKind, Msg};
pub use state::{FeedState, FetchId, ImageToken, Settings, SlotBinding, SlotId};
pub use style::{
    category_strip, resolve, ArticleSection, Background, CategoryStripSpec, CellKind, ImageSize,
    Style, StyleSheet, SOURCE_LOGO_SIZE,
};
pub use update::update;
pub use view_model::{ArticleRowView, CategoryChipView, FeedViewModel};
