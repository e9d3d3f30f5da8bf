// SPDX-License-Identifier: MPL-2.0

pub mod popup;
mod position;
mod render;
mod sanitize;

pub use popup::{PopupDocument, PopupSurface, Region};
pub use position::{Anchor, anchor_for_cursor, position_popup};
pub use render::render_profile;
pub use sanitize::sanitize;
