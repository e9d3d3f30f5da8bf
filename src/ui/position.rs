// SPDX-License-Identifier: MPL-2.0

use crate::state::CursorOffset;
use crate::ui::popup::{Display, Edge, PopupSurface};

/// Popup anchor in viewport pixels: `x` from the left edge, `y` from the
/// bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

/// Convert a pointer position (client coordinates, origin top-left) into the
/// popup anchor, offset so the popup does not cover the link.
pub fn anchor_for_cursor(
    client_x: f64,
    client_y: f64,
    viewport_height: f64,
    offset: CursorOffset,
) -> Anchor {
    Anchor {
        x: client_x + offset.x,
        y: viewport_height - client_y - offset.y,
    }
}

/// Show the popup with its bottom-left corner at `anchor`.
///
/// If the popup then sticks out above the viewport it is shifted down once
/// so its top lines up with the viewport's top edge.
pub fn position_popup<P: PopupSurface + ?Sized>(popup: &mut P, anchor: Anchor) {
    {
        let style = popup.style_mut();
        style.display = Display::Block;
        style.bottom = Edge::Px(anchor.y);
        style.top = Edge::Unset;
        style.left = Edge::Px(anchor.x);
    }

    let top = popup.bounding_top();
    if top < 0.0 {
        popup.style_mut().bottom = Edge::Px(anchor.y + top);
    }
}
