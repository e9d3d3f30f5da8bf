// SPDX-License-Identifier: MPL-2.0

//! Pulls the popup sections out of a profile page.
//!
//! Parsing is structural only: html5ever builds a tree, nothing in it is
//! executed or loaded. Sections the page lacks come back empty.

use crate::config::{INFO_SELECTOR, PHOTO_SELECTOR, PLAYER_NAME_ID, TITLE_SELECTOR};
use crate::pdga::ProfileRecord;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use std::fmt::Write as _;

static TITLE: Lazy<Selector> = Lazy::new(|| selector(TITLE_SELECTOR));
static PHOTO: Lazy<Selector> = Lazy::new(|| selector(PHOTO_SELECTOR));
static INFO: Lazy<Selector> = Lazy::new(|| selector(INFO_SELECTOR));
static IMAGE: Lazy<Selector> = Lazy::new(|| selector("img"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("invalid built-in selector")
}

/// Extract the title, photo and info sections of a profile page.
pub fn extract(raw: &str) -> ProfileRecord {
    let doc = Html::parse_document(raw);

    let title = doc.select(&TITLE).next();
    let photo = doc.select(&PHOTO).next();
    let info = doc.select(&INFO).next();

    if title.is_none() || photo.is_none() || info.is_none() {
        tracing::debug!(
            title = title.is_some(),
            photo = photo.is_some(),
            info = info.is_some(),
            "profile page is missing sections"
        );
    }

    ProfileRecord {
        title: title
            .map(|el| outer_html_with_id(el, PLAYER_NAME_ID))
            .unwrap_or_default(),
        photo: photo.map(|el| el.html()).unwrap_or_default(),
        has_photo: photo.is_some_and(|el| el.select(&IMAGE).next().is_some()),
        info: info.map(|el| el.inner_html()).unwrap_or_default(),
    }
}

/// Serialize an element with its `id` replaced, so it cannot clash with an
/// element already on the host page.
///
/// scraper's attributes are read-only and its serializer has no rename hook,
/// so the opening tag is written here and the children come from
/// `inner_html`.
fn outer_html_with_id(el: ElementRef<'_>, id: &str) -> String {
    let name = el.value().name();
    let mut out = String::new();
    let _ = write!(out, "<{name} id=\"{}\"", escape_attr(id));
    for (attr, value) in el.value().attrs() {
        if attr == "id" {
            continue;
        }
        let _ = write!(out, " {attr}=\"{}\"", escape_attr(value));
    }
    out.push('>');
    out.push_str(&el.inner_html());
    let _ = write!(out, "</{name}>");
    out
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PROFILE: &str = r#"<!DOCTYPE html>
<html><head><title>Jane Doe | PDGA</title></head>
<body>
  <h1 id="page-title" class="title">Jane Doe #12345</h1>
  <div class="panel-pane pane-player-photo-player-photo-pane">
    <a href="/files/jane.jpg"><img src="/files/jane.jpg" alt="Jane"></a>
  </div>
  <div class="panel-pane pane-player-player-info">
    <ul><li class="current-rating">Rating: 1000</li><li>Location: Portland, OR</li></ul>
  </div>
</body></html>"#;

    #[test]
    fn test_full_profile() {
        let record = extract(FULL_PROFILE);

        assert!(record.title.starts_with("<h1 id=\"PDGAprofiler-player-name\""));
        assert!(record.title.contains("class=\"title\""));
        assert!(record.title.contains("Jane Doe #12345"));
        assert!(!record.title.contains("page-title"));

        assert!(record.photo.starts_with("<div"));
        assert!(record.photo.contains("pane-player-photo-player-photo-pane"));
        assert!(record.has_photo);

        assert!(record.info.starts_with("\n    <ul>"));
        assert!(record.info.contains("Rating: 1000"));
        assert!(!record.info.contains("pane-player-player-info"));
    }

    #[test]
    fn test_title_only() {
        let record = extract(r#"<h1 id="page-title">Jane Doe</h1>"#);
        assert_eq!(
            record.title,
            r#"<h1 id="PDGAprofiler-player-name">Jane Doe</h1>"#
        );
        assert_eq!(record.photo, "");
        assert!(!record.has_photo);
        assert_eq!(record.info, "");
    }

    #[test]
    fn test_photo_pane_without_image() {
        let record = extract(
            r#"<div class="pane-player-photo-player-photo-pane"><p>No photo</p></div>"#,
        );
        assert!(record.photo.contains("No photo"));
        assert!(!record.has_photo);
    }

    #[test]
    fn test_empty_photo_pane() {
        let record = extract(r#"<div class="pane-player-photo-player-photo-pane"></div>"#);
        assert!(!record.photo.is_empty());
        assert!(!record.has_photo);
    }

    #[test]
    fn test_garbage_input_degrades() {
        for raw in ["", "not html at all", "<<<>>>&&&", "\u{0}\u{1}", "<div><span>"] {
            assert_eq!(extract(raw), ProfileRecord::default(), "input {raw:?}");
        }
    }

    #[test]
    fn test_title_attribute_values_escaped() {
        let record = extract(r#"<h1 id="page-title" data-x="a&quot;b">X</h1>"#);
        assert!(record.title.contains(r#"data-x="a&quot;b""#));
    }

    #[test]
    fn test_title_id_replaced_wherever_it_appears() {
        let record =
            extract(r#"<h1 class="a<b" id="page-title" title="x & y">Jane <em>Doe</em></h1>"#);
        assert!(record.title.starts_with(r#"<h1 id="PDGAprofiler-player-name""#));
        assert!(record.title.contains(r#"class="a&lt;b""#));
        assert!(record.title.contains(r#"title="x &amp; y""#));
        assert!(record.title.ends_with("Jane <em>Doe</em></h1>"));
        assert_eq!(record.title.matches("id=").count(), 1);
    }

    #[test]
    fn test_scripts_are_kept_raw_for_the_renderer() {
        // Extraction does not sanitize; the renderer does.
        let record =
            extract(r#"<h1 id="page-title">Jane <script>alert(1)</script></h1>"#);
        assert!(record.title.contains("<script>"));
    }
}
