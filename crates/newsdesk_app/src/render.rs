//! Text rendering of the feed view model. The console stands in for the
//! virtualized grid: one numbered line per article row, chips on top.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use newsdesk_core::{ArticleSection, Background, FeedState, SlotId};

use crate::images::ImageStore;

pub fn render(state: &FeedState, images: &ImageStore) -> String {
    let view = state.view();
    let mut out = String::new();

    let _ = writeln!(out);
    if view.loading {
        let _ = writeln!(out, "== {} — loading…", view.title);
    } else {
        let _ = writeln!(out, "== {}", view.title);
    }

    // Chips grouped the way the paged strip pages them, three per page.
    let per_page = view.category_strip.items_per_page.max(1) as usize;
    let pages: Vec<String> = view
        .categories
        .chunks(per_page)
        .map(|page| {
            page.iter()
                .map(|chip| {
                    if chip.selected {
                        format!("[{}]", chip.name)
                    } else {
                        chip.name.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect();
    let _ = writeln!(out, "{}", pages.join("  |  "));
    let _ = writeln!(
        out,
        "-- {} cells, {}, {} background --",
        view.cell_kind.reuse_identifier(),
        describe_section(view.article_section),
        describe_background(view.background),
    );

    if view.articles.is_empty() && !view.loading {
        let _ = writeln!(out, "(no articles)");
        return out;
    }

    let now = Utc::now();
    for (index, row) in view.articles.iter().enumerate() {
        let binding = state.slot(index as SlotId);
        let image_marker = binding
            .and_then(|b| b.image)
            .and_then(|token| images.byte_len(token))
            .map(|len| format!("[img {}]", format_byte_len(len)))
            .unwrap_or_else(|| "[    ·    ]".to_string());
        let logo_marker = binding
            .and_then(|b| b.source_logo)
            .map(|_| "◉ ")
            .unwrap_or("");

        let badge = row
            .badge
            .map(|number| format!("#{number} "))
            .unwrap_or_default();
        let source = row.source_name.as_deref().unwrap_or("—");
        let age = row
            .published_at
            .as_deref()
            .and_then(|published| format_relative(published, now))
            .map(|age| format!(" ({age})"))
            .unwrap_or_default();

        let _ = writeln!(
            out,
            "{:>2}) {image_marker} {badge}{logo_marker}{source}: {}{age}",
            index + 1,
            row.title,
        );
        if let Some(summary) = &row.summary {
            let _ = writeln!(out, "      {summary}");
        }
    }

    out
}

pub fn help_text() -> &'static str {
    "commands:\n  \
     category <name>   switch category (general, business, entertainment,\n                    \
     health, science, sports, technology)\n  \
     style <name>      switch style (cnn, nyt, bbc, wsj, washingtonpost,\n                    \
     twitter, facebook, reddit, flipboard, lilnews)\n  \
     refresh           reload the current category\n  \
     open <n>          open article n in the browser\n  \
     quit              exit"
}

fn describe_section(section: ArticleSection) -> &'static str {
    match section {
        ArticleSection::PagedImageFeed { .. } => "paged image feed",
        ArticleSection::FullWidthList { .. } => "full-width list",
        ArticleSection::InsetList { .. } => "inset list",
        ArticleSection::InsetFixedHeightList { .. } => "inset fixed-height list",
    }
}

fn describe_background(background: Background) -> &'static str {
    match background {
        Background::Default => "default",
        Background::LightGray => "light-gray",
    }
}

fn format_byte_len(len: usize) -> String {
    if len >= 1024 * 1024 {
        format!("{:.1} MB", len as f64 / (1024.0 * 1024.0))
    } else if len >= 1024 {
        format!("{:.1} KB", len as f64 / 1024.0)
    } else {
        format!("{len} B")
    }
}

/// "5m ago" / "3h ago" / "2d ago" for an RFC 3339 timestamp.
fn format_relative(published: &str, now: DateTime<Utc>) -> Option<String> {
    let published = DateTime::parse_from_rfc3339(published).ok()?;
    let delta = now.signed_duration_since(published.with_timezone(&Utc));
    if delta.num_seconds() < 0 {
        return None;
    }
    let formatted = if delta.num_minutes() < 1 {
        "just now".to_string()
    } else if delta.num_hours() < 1 {
        format!("{}m ago", delta.num_minutes())
    } else if delta.num_days() < 1 {
        format!("{}h ago", delta.num_hours())
    } else {
        format!("{}d ago", delta.num_days())
    };
    Some(formatted)
}
