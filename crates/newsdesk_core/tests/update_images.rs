use newsdesk_core::{
    update, Article, Effect, FeedState, ImageKind, ImageSize, Msg, Settings, SlotBinding,
    SOURCE_LOGO_SIZE,
};
use url::Url;

fn article_with_images(id: &str) -> Article {
    Article {
        id: id.to_string(),
        title: format!("Title {id}"),
        summary: None,
        url: None,
        image_url: Some(Url::parse(&format!("https://img.example.com/{id}.jpg")).unwrap()),
        source_name: Some("Example Wire".to_string()),
        source_logo_url: Some(Url::parse("https://logo.example.com/wire.png").unwrap()),
        published_at: None,
    }
}

fn loaded(n: usize) -> FeedState {
    let (state, effects) = update(FeedState::new(), Msg::ScreenAppeared);
    let fetch_id = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchArticles { fetch_id, .. } => Some(*fetch_id),
            _ => None,
        })
        .expect("fetch effect");
    let list = (0..n)
        .map(|i| article_with_images(&format!("a{i}")))
        .collect();
    let (state, _) = update(
        state,
        Msg::ArticlesLoaded {
            fetch_id,
            articles: Some(list),
        },
    );
    state
}

#[test]
fn slot_display_requests_article_image_at_cell_size() {
    let state = loaded(3);

    // Default style (nyt) has no source logo.
    let (_state, effects) = update(state, Msg::SlotDisplayed { slot: 0, index: 1 });

    assert_eq!(
        effects,
        vec![Effect::FetchImage {
            slot: 0,
            article_id: "a1".to_string(),
            kind: ImageKind::Article,
            url: Url::parse("https://img.example.com/a1.jpg").unwrap(),
            size: ImageSize::new(320, 240),
        }]
    );
}

#[test]
fn source_logo_requested_for_logo_styles() {
    let state = loaded(3);
    let (state, _) = update(
        state,
        Msg::StylePicked {
            name: "twitter".to_string(),
        },
    );

    let (_state, effects) = update(state, Msg::SlotDisplayed { slot: 2, index: 0 });

    assert_eq!(effects.len(), 2);
    assert_eq!(
        effects[1],
        Effect::FetchImage {
            slot: 2,
            article_id: "a0".to_string(),
            kind: ImageKind::SourceLogo,
            url: Url::parse("https://logo.example.com/wire.png").unwrap(),
            size: SOURCE_LOGO_SIZE,
        }
    );
}

#[test]
fn image_applies_on_matching_identifier() {
    let state = loaded(2);
    let (mut state, _) = update(state, Msg::SlotDisplayed { slot: 0, index: 0 });
    state.consume_dirty();

    let (mut state, effects) = update(
        state,
        Msg::ImageLoaded {
            slot: 0,
            article_id: "a0".to_string(),
            kind: ImageKind::Article,
            image: Some(41),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(
        state.slot(0),
        Some(&SlotBinding {
            article_id: "a0".to_string(),
            image: Some(41),
            source_logo: None,
        })
    );
    assert!(state.consume_dirty());
}

#[test]
fn stale_image_delivery_to_rebound_slot_is_noop() {
    let state = loaded(2);
    let (state, _) = update(state, Msg::SlotDisplayed { slot: 0, index: 0 });
    // The slot is recycled for a different article while the first fetch is
    // still outstanding.
    let (mut state, _) = update(state, Msg::SlotDisplayed { slot: 0, index: 1 });
    state.consume_dirty();

    let (mut state, _) = update(
        state,
        Msg::ImageLoaded {
            slot: 0,
            article_id: "a0".to_string(),
            kind: ImageKind::Article,
            image: Some(7),
        },
    );

    assert_eq!(
        state.slot(0),
        Some(&SlotBinding {
            article_id: "a1".to_string(),
            image: None,
            source_logo: None,
        })
    );
    assert!(!state.consume_dirty());
}

#[test]
fn failed_image_keeps_placeholder() {
    let state = loaded(1);
    let (mut state, _) = update(state, Msg::SlotDisplayed { slot: 3, index: 0 });
    state.consume_dirty();

    let (mut state, _) = update(
        state,
        Msg::ImageLoaded {
            slot: 3,
            article_id: "a0".to_string(),
            kind: ImageKind::Article,
            image: None,
        },
    );

    assert_eq!(state.slot(3).unwrap().image, None);
    assert!(!state.consume_dirty());
}

#[test]
fn delivery_to_unbound_slot_is_noop() {
    let mut state = loaded(1);
    state.consume_dirty();

    let (mut state, _) = update(
        state,
        Msg::ImageLoaded {
            slot: 9,
            article_id: "a0".to_string(),
            kind: ImageKind::Article,
            image: Some(1),
        },
    );

    assert_eq!(state.slot(9), None);
    assert!(!state.consume_dirty());
}

#[test]
fn slot_display_out_of_range_is_noop() {
    let state = loaded(1);

    let (state, effects) = update(state, Msg::SlotDisplayed { slot: 0, index: 4 });

    assert!(effects.is_empty());
    assert_eq!(state.slot(0), None);
}

#[test]
fn article_without_image_url_requests_nothing() {
    let (state, effects) = update(FeedState::new(), Msg::ScreenAppeared);
    let fetch_id = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchArticles { fetch_id, .. } => Some(*fetch_id),
            _ => None,
        })
        .unwrap();
    let mut bare = article_with_images("a0");
    bare.image_url = None;
    bare.source_logo_url = None;
    let (state, _) = update(
        state,
        Msg::ArticlesLoaded {
            fetch_id,
            articles: Some(vec![bare]),
        },
    );

    let (state, effects) = update(state, Msg::SlotDisplayed { slot: 0, index: 0 });

    assert!(effects.is_empty());
    // The slot is still bound so a later list knows what it shows.
    assert_eq!(state.slot(0).unwrap().article_id, "a0");
}

#[test]
fn reload_clears_slot_bindings() {
    let state = loaded(2);
    let (state, _) = update(state, Msg::SlotDisplayed { slot: 0, index: 0 });
    assert!(state.slot(0).is_some());

    let (state, _) = update(state, Msg::RefreshPulled);

    assert_eq!(state.slot(0), None);
    assert_eq!(state.settings(), Settings::default());
}

#[test]
fn style_change_rebinds_slots_for_the_new_template() {
    let state = loaded(2);
    let (state, _) = update(state, Msg::SlotDisplayed { slot: 0, index: 0 });
    assert!(state.slot(0).is_some());

    // The new template has its own image size, so bindings restart empty
    // and the renderer re-requests images on the next pass.
    let (state, _) = update(
        state,
        Msg::StylePicked {
            name: "lilnews".to_string(),
        },
    );
    assert_eq!(state.slot(0), None);
}
