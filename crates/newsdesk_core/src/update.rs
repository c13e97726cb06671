use crate::{
    resolve, Category, Effect, FeedState, ImageKind, Msg, SlotId, Style, SOURCE_LOGO_SIZE,
};

const FETCH_FAILED_ALERT: &str = "Could not get articles 😅";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FeedState, msg: Msg) -> (FeedState, Vec<Effect>) {
    let effects = match msg {
        Msg::ScreenAppeared | Msg::RefreshPulled => begin_load(&mut state),
        Msg::CategoryChipTapped { index } => match Category::ALL.get(index) {
            Some(&category) => select_category(&mut state, category),
            None => Vec::new(),
        },
        Msg::CategoryPicked { name } => match Category::from_name(&name) {
            Some(category) => select_category(&mut state, category),
            // Unknown name: the previous selection is silently retained.
            None => Vec::new(),
        },
        Msg::StylePicked { name } => match Style::from_name(&name) {
            Some(style) => select_style(&mut state, style),
            None => Vec::new(),
        },
        Msg::ArticleTapped { index } => match state.article(index).and_then(|a| a.url.clone()) {
            Some(url) => vec![Effect::OpenArticle { url }],
            // Articles without a destination URL are inert.
            None => Vec::new(),
        },
        Msg::ArticlesLoaded { fetch_id, articles } => {
            if state.current_fetch() != Some(fetch_id) {
                // Superseded fetch: discard entirely.
                return (state, Vec::new());
            }
            state.finish_load();
            match articles {
                Some(list) => {
                    state.set_articles(list);
                    vec![Effect::EndRefreshing, Effect::ScrollToTop]
                }
                None => vec![
                    Effect::EndRefreshing,
                    Effect::PresentAlert {
                        message: FETCH_FAILED_ALERT.to_string(),
                    },
                ],
            }
        }
        Msg::LoadAborted { fetch_id } => {
            if state.current_fetch() != Some(fetch_id) {
                return (state, Vec::new());
            }
            // Unresolvable category URL: return to Idle without an alert.
            state.finish_load();
            vec![Effect::EndRefreshing]
        }
        Msg::SlotDisplayed { slot, index } => display_slot(&mut state, slot, index),
        Msg::ImageLoaded {
            slot,
            article_id,
            kind,
            image,
        } => {
            state.apply_image(slot, &article_id, kind, image);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn begin_load(state: &mut FeedState) -> Vec<Effect> {
    let fetch_id = state.begin_load();
    vec![Effect::FetchArticles {
        fetch_id,
        category: state.settings().category,
    }]
}

fn select_category(state: &mut FeedState, category: Category) -> Vec<Effect> {
    state.set_category(category);
    let mut effects = vec![Effect::PersistSettings {
        settings: state.settings(),
    }];
    effects.extend(begin_load(state));
    effects
}

fn select_style(state: &mut FeedState, style: Style) -> Vec<Effect> {
    // No refetch: the held list re-renders under the new layout.
    state.set_style(style);
    vec![
        Effect::PersistSettings {
            settings: state.settings(),
        },
        Effect::ScrollToTop,
    ]
}

fn display_slot(state: &mut FeedState, slot: SlotId, index: usize) -> Vec<Effect> {
    let Some(article) = state.article(index).cloned() else {
        return Vec::new();
    };
    state.bind_slot(slot, article.id.clone());

    let cell = resolve(state.settings().style).cell;
    let mut effects = Vec::new();
    if let Some(url) = article.image_url.clone() {
        effects.push(Effect::FetchImage {
            slot,
            article_id: article.id.clone(),
            kind: ImageKind::Article,
            url,
            size: cell.image_size(),
        });
    }
    if cell.shows_source_logo() {
        if let Some(url) = article.source_logo_url.clone() {
            effects.push(Effect::FetchImage {
                slot,
                article_id: article.id,
                kind: ImageKind::SourceLogo,
                url,
                size: SOURCE_LOGO_SIZE,
            });
        }
    }
    effects
}
