// SPDX-License-Identifier: MPL-2.0

//! Player profile popups for PDGA pages.
//!
//! Hovering a player link on a host page shows a floating popup with the
//! player's name, photo and info, taken from their profile page on
//! pdga.com.
//!
//! - [`pdga`]: profile references, the HTTP fetcher, the profile extractor
//!   and player link detection.
//! - [`ui`]: the popup surface, sanitizing renderer and viewport positioner.
//! - [`app`]: the hover controller that debounces pointer events and drives
//!   fetch → extract → render → position.
//!
//! The page glue (finding links, wiring pointer events, creating the popup
//! node) implements [`ui::PopupSurface`] and forwards events to
//! [`app::HoverController`].

pub mod app;
pub mod config;
pub mod pdga;
pub mod runtime;
pub mod state;
pub mod ui;
