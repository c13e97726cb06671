//! Style resolution: maps the selected visual style to a concrete layout,
//! background treatment, and cell template.

/// Fixed visual presentation applied to the article list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    Cnn,
    #[default]
    Nyt,
    Bbc,
    Wsj,
    WashingtonPost,
    Twitter,
    Facebook,
    Reddit,
    Flipboard,
    LilNews,
}

impl Style {
    /// Presentation order for the style picker.
    pub const ALL: [Style; 10] = [
        Style::Cnn,
        Style::Nyt,
        Style::Bbc,
        Style::Wsj,
        Style::WashingtonPost,
        Style::Twitter,
        Style::Facebook,
        Style::Reddit,
        Style::Flipboard,
        Style::LilNews,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Style::Cnn => "cnn",
            Style::Nyt => "nyt",
            Style::Bbc => "bbc",
            Style::Wsj => "wsj",
            Style::WashingtonPost => "washingtonpost",
            Style::Twitter => "twitter",
            Style::Facebook => "facebook",
            Style::Reddit => "reddit",
            Style::Flipboard => "flipboard",
            Style::LilNews => "lilnews",
        }
    }

    /// Parses a style name, case-insensitively. Unknown names yield `None`;
    /// callers retain the previous selection.
    pub fn from_name(name: &str) -> Option<Self> {
        Style::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

/// Layout descriptor for the article section. Dimensions are in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArticleSection {
    /// Single column of full-screen image cards, paged vertically.
    PagedImageFeed { height_fraction: f32 },
    /// Edge-to-edge rows with self-sizing height.
    FullWidthList { estimated_height: f32, spacing: f32 },
    /// Rows inset to the readable width with self-sizing height.
    InsetList { estimated_height: f32, spacing: f32 },
    /// Rows inset to the readable width at a fixed height.
    InsetFixedHeightList { height: f32, spacing: f32 },
}

impl ArticleSection {
    pub fn paged_image_feed() -> Self {
        ArticleSection::PagedImageFeed {
            height_fraction: 0.895,
        }
    }

    pub fn full_width_list() -> Self {
        ArticleSection::FullWidthList {
            estimated_height: 450.0,
            spacing: 10.0,
        }
    }

    pub fn inset_list() -> Self {
        ArticleSection::InsetList {
            estimated_height: 100.0,
            spacing: 10.0,
        }
    }

    pub fn inset_fixed_height_list() -> Self {
        ArticleSection::InsetFixedHeightList {
            height: 90.0,
            spacing: 10.0,
        }
    }
}

/// Background treatment behind the article grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Default,
    LightGray,
}

impl Background {
    /// RGB of the neutral light-gray alternate.
    pub const LIGHT_GRAY_RGB: (u8, u8, u8) = (228, 229, 230);
}

/// Requested pixel size for an image fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Source logos render at a fixed size regardless of cell kind.
pub const SOURCE_LOGO_SIZE: ImageSize = ImageSize::new(60, 60);

/// Rendering template instantiated for article entries, one per style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Cnn,
    Nyt,
    Bbc,
    Wsj,
    WashingtonPost,
    Twitter,
    Facebook,
    Reddit,
    Flipboard,
    LilNews,
}

impl CellKind {
    /// Stable template name used by the rendering surface to dequeue cells.
    pub fn reuse_identifier(self) -> &'static str {
        match self {
            CellKind::Cnn => "cnn",
            CellKind::Nyt => "nyt",
            CellKind::Bbc => "bbc",
            CellKind::Wsj => "wsj",
            CellKind::WashingtonPost => "washingtonpost",
            CellKind::Twitter => "twitter",
            CellKind::Facebook => "facebook",
            CellKind::Reddit => "reddit",
            CellKind::Flipboard => "flipboard",
            CellKind::LilNews => "lilnews",
        }
    }

    /// Rows carry a 1-based badge number.
    pub fn badge_numbered(self) -> bool {
        matches!(self, CellKind::Bbc)
    }

    /// Cells additionally display the source's logo.
    pub fn shows_source_logo(self) -> bool {
        matches!(
            self,
            CellKind::Twitter | CellKind::Facebook | CellKind::Reddit | CellKind::Flipboard
        )
    }

    /// Target size for the article image in this template.
    pub fn image_size(self) -> ImageSize {
        match self {
            CellKind::Cnn => ImageSize::new(640, 360),
            CellKind::Nyt => ImageSize::new(320, 240),
            CellKind::Bbc => ImageSize::new(140, 90),
            CellKind::Wsj => ImageSize::new(320, 240),
            CellKind::WashingtonPost => ImageSize::new(640, 360),
            CellKind::Twitter => ImageSize::new(500, 260),
            CellKind::Facebook => ImageSize::new(500, 300),
            CellKind::Reddit => ImageSize::new(140, 140),
            CellKind::Flipboard => ImageSize::new(600, 340),
            CellKind::LilNews => ImageSize::new(600, 800),
        }
    }
}

/// Resolved presentation for one style: layout, background, cell template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSheet {
    pub article_section: ArticleSection,
    pub background: Background,
    pub cell: CellKind,
}

/// Resolves a style to its sheet. Total over `Style`; pure.
pub fn resolve(style: Style) -> StyleSheet {
    let (article_section, background) = match style {
        Style::LilNews => (ArticleSection::paged_image_feed(), Background::Default),
        Style::Reddit | Style::Flipboard => {
            (ArticleSection::full_width_list(), Background::LightGray)
        }
        Style::Bbc => (
            ArticleSection::inset_fixed_height_list(),
            Background::LightGray,
        ),
        Style::Cnn
        | Style::Nyt
        | Style::Wsj
        | Style::WashingtonPost
        | Style::Twitter
        | Style::Facebook => (ArticleSection::full_width_list(), Background::Default),
    };

    let cell = match style {
        Style::Cnn => CellKind::Cnn,
        Style::Nyt => CellKind::Nyt,
        Style::Bbc => CellKind::Bbc,
        Style::Wsj => CellKind::Wsj,
        Style::WashingtonPost => CellKind::WashingtonPost,
        Style::Twitter => CellKind::Twitter,
        Style::Facebook => CellKind::Facebook,
        Style::Reddit => CellKind::Reddit,
        Style::Flipboard => CellKind::Flipboard,
        Style::LilNews => CellKind::LilNews,
    };

    StyleSheet {
        article_section,
        background,
        cell,
    }
}

/// Fixed layout for the category-picker strip, independent of style:
/// horizontally paged, three chips per page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryStripSpec {
    pub items_per_page: u32,
    pub height: f32,
    pub item_inset: f32,
    pub group_inset: f32,
    pub paged: bool,
}

pub fn category_strip() -> CategoryStripSpec {
    CategoryStripSpec {
        items_per_page: 3,
        height: 44.0,
        item_inset: 8.0,
        group_inset: 12.0,
        paged: true,
    }
}
