use url::Url;

/// Stable identifier unique per article for one fetch cycle.
pub type ArticleId = String;

/// One fetched article. Immutable once constructed; the whole list is
/// replaced on every successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub summary: Option<String>,
    pub url: Option<Url>,
    pub image_url: Option<Url>,
    pub source_name: Option<String>,
    pub source_logo_url: Option<Url>,
    /// RFC 3339 timestamp as delivered by the service.
    pub published_at: Option<String>,
}

/// Fixed topic filter for the headlines feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    General,
    Business,
    Entertainment,
    Health,
    Science,
    Sports,
    Technology,
}

impl Category {
    /// Canonical order, also the order of the category strip.
    pub const ALL: [Category; 7] = [
        Category::General,
        Category::Business,
        Category::Entertainment,
        Category::Health,
        Category::Science,
        Category::Sports,
        Category::Technology,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::Health => "health",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
        }
    }

    /// Parses a category name, case-insensitively. Unknown names yield
    /// `None`; callers retain the previous selection.
    pub fn from_name(name: &str) -> Option<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// Name with the first letter capitalized, for chips and titles.
    pub fn display_name(self) -> String {
        capitalize_first(self.as_str())
    }
}

pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
