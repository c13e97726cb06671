use crate::article::capitalize_first;
use crate::{
    category_strip, resolve, ArticleId, ArticleSection, Background, Category, CategoryStripSpec,
    CellKind, FeedState,
};

/// Everything the rendering surface needs to draw the screen: resolved
/// layout, chip row, and one row view per article.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedViewModel {
    pub title: String,
    pub loading: bool,
    pub background: Background,
    pub article_section: ArticleSection,
    pub category_strip: CategoryStripSpec,
    pub cell_kind: CellKind,
    pub categories: Vec<CategoryChipView>,
    pub articles: Vec<ArticleRowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChipView {
    pub name: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRowView {
    pub id: ArticleId,
    pub title: String,
    pub summary: Option<String>,
    pub source_name: Option<String>,
    pub published_at: Option<String>,
    /// 1-based row number, present only for badge-numbered templates.
    pub badge: Option<usize>,
    pub has_link: bool,
}

impl FeedViewModel {
    pub(crate) fn project(state: &FeedState) -> Self {
        let settings = state.settings();
        let sheet = resolve(settings.style);

        let categories = Category::ALL
            .into_iter()
            .map(|category| CategoryChipView {
                name: category.display_name(),
                selected: category == settings.category,
            })
            .collect();

        let articles = state
            .articles()
            .iter()
            .enumerate()
            .map(|(index, article)| ArticleRowView {
                id: article.id.clone(),
                title: article.title.clone(),
                summary: article.summary.clone(),
                source_name: article.source_name.clone(),
                published_at: article.published_at.clone(),
                badge: sheet.cell.badge_numbered().then_some(index + 1),
                has_link: article.url.is_some(),
            })
            .collect();

        Self {
            title: format!("{} News", capitalize_first(settings.category.as_str())),
            loading: state.is_loading(),
            background: sheet.background,
            article_section: sheet.article_section,
            category_strip: category_strip(),
            cell_kind: sheet.cell,
            categories,
            articles,
        }
    }
}
