// SPDX-License-Identifier: MPL-2.0

//! Player link detection on host pages.
//!
//! A qualifying link points at `/player/<number>` (optionally with a trailing
//! slash) and is not the "Player Statistics" navigation entry, which shares
//! the same path.

use crate::config::{LINK_CLASS, STATISTICS_LABEL};
use crate::pdga::PlayerLink;
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static PROFILE_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/player/\d+/?$").unwrap());

static PLAYER_ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"a[href^="/player/"]"#).unwrap());

/// Whether an href's path is a player profile page (not a sub-page like
/// `/player/123/stats`).
pub fn is_player_profile_path(href: &str) -> bool {
    let path = href.split(['?', '#']).next().unwrap_or_default();
    PROFILE_PATH_RE.is_match(path)
}

/// Collect every player profile link on a page, in document order.
pub fn find_player_links(page_html: &str) -> Vec<PlayerLink> {
    let doc = Html::parse_document(page_html);

    doc.select(&PLAYER_ANCHOR)
        .filter_map(|anchor| {
            let href = anchor.value().attr("href")?;
            let text: String = anchor.text().collect();
            if !is_player_profile_path(href) {
                return None;
            }
            if text.trim().to_uppercase() == STATISTICS_LABEL {
                return None;
            }
            Some(PlayerLink {
                href: href.to_string(),
                text: text.trim().to_string(),
                class: tagged_class(anchor.value().attr("class")),
            })
        })
        .collect()
}

/// Append the player link marker to an existing class attribute.
fn tagged_class(existing: Option<&str>) -> String {
    let existing = existing.unwrap_or_default();
    if existing.split_whitespace().any(|class| class == LINK_CLASS) {
        return existing.trim().to_string();
    }
    match existing.trim() {
        "" => LINK_CLASS.to_string(),
        classes => format!("{classes} {LINK_CLASS}"),
    }
}
