// SPDX-License-Identifier: MPL-2.0

//! The floating popup and the surface it is drawn on.
//!
//! [`PopupSurface`] is what the renderer and positioner write to. The page
//! glue implements it over real DOM nodes; [`PopupDocument`] is the headless
//! implementation with a simple layout model, used by the CLI preview and the
//! tests.

use crate::config::{
    INFO_REGION_ID, PHOTO_REGION_ID, POPUP_ID, SEPARATOR_CLASS, SEPARATOR_HTML, TITLE_REGION_ID,
};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::fmt::Write as _;

/// Content regions of the popup that receive remote markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Photo,
    Title,
    Info,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Photo, Region::Title, Region::Info];

    pub fn id(self) -> &'static str {
        match self {
            Region::Photo => PHOTO_REGION_ID,
            Region::Title => TITLE_REGION_ID,
            Region::Info => INFO_REGION_ID,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    None,
    Block,
}

/// One positional CSS property of the popup.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Edge {
    #[default]
    Unset,
    Px(f64),
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Unset => f.write_str("unset"),
            Edge::Px(px) => write!(f, "{px}px"),
        }
    }
}

/// Inline style of the popup root.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PopupStyle {
    pub display: Display,
    pub left: Edge,
    pub bottom: Edge,
    pub top: Edge,
}

/// Where the popup lives. Writes happen only from the renderer and the
/// positioner.
pub trait PopupSurface: Send + 'static {
    /// Replace a region's children with already sanitized markup.
    fn set_inner_html(&mut self, region: Region, html: &str);
    fn set_class(&mut self, region: Region, class: &str, enabled: bool);
    fn style(&self) -> &PopupStyle;
    fn style_mut(&mut self) -> &mut PopupStyle;
    /// Rendered top edge of the popup relative to the viewport. Forces layout.
    fn bounding_top(&mut self) -> f64;
    fn viewport_height(&self) -> f64;

    fn is_visible(&self) -> bool {
        self.style().display == Display::Block
    }

    fn hide(&mut self) {
        self.style_mut().display = Display::None;
    }
}

#[derive(Debug, Default)]
struct RegionNode {
    inner_html: String,
    classes: BTreeSet<String>,
}

/// Headless popup: the skeleton plus a fixed-height layout.
#[derive(Debug)]
pub struct PopupDocument {
    regions: HashMap<&'static str, RegionNode>,
    style: PopupStyle,
    viewport_height: f64,
    rendered_height: f64,
}

impl PopupDocument {
    /// Build the skeleton: photo, title, separator and info regions, hidden.
    pub fn new(viewport_height: f64, rendered_height: f64) -> Self {
        let regions = Region::ALL
            .into_iter()
            .map(|region| (region.id(), RegionNode::default()))
            .collect();
        Self {
            regions,
            style: PopupStyle::default(),
            viewport_height,
            rendered_height,
        }
    }

    pub fn inner_html(&self, region: Region) -> &str {
        &self.node(region).inner_html
    }

    pub fn has_class(&self, region: Region, class: &str) -> bool {
        self.node(region).classes.contains(class)
    }

    /// Serialize the popup the way it would appear in the host page.
    pub fn outer_html(&self) -> String {
        let style = &self.style;
        let display = match style.display {
            Display::None => "none",
            Display::Block => "block",
        };

        let mut out = String::new();
        let _ = write!(
            out,
            "<div id=\"{POPUP_ID}\" style=\"display: {display}; bottom: {}; top: {}; left: {};\">",
            style.bottom, style.top, style.left
        );
        self.write_region(&mut out, Region::Photo);
        self.write_region(&mut out, Region::Title);
        let _ = write!(out, "<div class=\"{SEPARATOR_CLASS}\">{SEPARATOR_HTML}</div>");
        self.write_region(&mut out, Region::Info);
        out.push_str("</div>");
        out
    }

    fn write_region(&self, out: &mut String, region: Region) {
        let node = self.node(region);
        let _ = write!(out, "<div id=\"{}\"", region.id());
        if !node.classes.is_empty() {
            let classes: Vec<&str> = node.classes.iter().map(String::as_str).collect();
            let _ = write!(out, " class=\"{}\"", classes.join(" "));
        }
        let _ = write!(out, ">{}</div>", node.inner_html);
    }

    fn node(&self, region: Region) -> &RegionNode {
        self.regions
            .get(region.id())
            .unwrap_or_else(|| missing_region(region))
    }

    fn node_mut(&mut self, region: Region) -> &mut RegionNode {
        self.regions
            .get_mut(region.id())
            .unwrap_or_else(|| missing_region(region))
    }
}

/// The skeleton is built once at startup; a missing region is a setup bug.
fn missing_region(region: Region) -> ! {
    panic!("popup region #{} missing: skeleton not initialized", region.id())
}

impl PopupSurface for PopupDocument {
    fn set_inner_html(&mut self, region: Region, html: &str) {
        self.node_mut(region).inner_html = html.to_string();
    }

    fn set_class(&mut self, region: Region, class: &str, enabled: bool) {
        let classes = &mut self.node_mut(region).classes;
        if enabled {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn style(&self) -> &PopupStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut PopupStyle {
        &mut self.style
    }

    fn bounding_top(&mut self) -> f64 {
        match (self.style.top, self.style.bottom) {
            (Edge::Px(top), _) => top,
            (Edge::Unset, Edge::Px(bottom)) => {
                self.viewport_height - bottom - self.rendered_height
            }
            (Edge::Unset, Edge::Unset) => 0.0,
        }
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }
}
