// SPDX-License-Identifier: MPL-2.0

pub const APP_ID: &str = "io.github.sethcottle.PdgaProfiler";
pub const APP_NAME: &str = "PDGA Profiler";

#[cfg(feature = "devel")]
pub const IS_DEVEL: bool = true;
#[cfg(not(feature = "devel"))]
pub const IS_DEVEL: bool = false;

/// Every profile reference is normalized against this origin.
pub const PDGA_ORIGIN: &str = "https://www.pdga.com";
/// Older pages still link with the plain-http origin.
pub const LEGACY_ORIGIN: &str = "http://www.pdga.com";

/// Delay before a hovered link triggers a fetch.
pub const HOVER_TIMEOUT_MS: u64 = 250;
/// Delay before the popup is dismissed after the pointer leaves.
pub const INFO_TIMEOUT_MS: u64 = 800;

/// Popup sits to the right of the cursor...
pub const CURSOR_OFFSET_X: f64 = 30.0;
/// ...and slightly below it.
pub const CURSOR_OFFSET_Y: f64 = 10.0;

// Popup skeleton identifiers.
pub const POPUP_ID: &str = "PDGAprofiler-player";
pub const PHOTO_REGION_ID: &str = "PDGAprofiler-player-photo";
pub const TITLE_REGION_ID: &str = "PDGAprofiler-player-title";
pub const INFO_REGION_ID: &str = "PDGAprofiler-player-info";
pub const SEPARATOR_CLASS: &str = "panel-pane pane-horizontal-rule";
pub const SEPARATOR_HTML: &str = "<hr/>";
pub const PLAYER_NAME_ID: &str = "PDGAprofiler-player-name";
pub const HAS_PHOTO_CLASS: &str = "hasPhoto";
/// Added to every qualifying player link on the host page.
pub const LINK_CLASS: &str = "PDGAprofiler-player";

// Remote profile page structure.
pub const TITLE_SELECTOR: &str = "h1#page-title";
pub const PHOTO_SELECTOR: &str = "div.pane-player-photo-player-photo-pane";
pub const INFO_SELECTOR: &str = ".pane-player-player-info";

/// Navigation link that points at a profile path but is not a player.
pub const STATISTICS_LABEL: &str = "PLAYER STATISTICS";
