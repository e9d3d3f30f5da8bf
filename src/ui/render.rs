// SPDX-License-Identifier: MPL-2.0

use crate::config::HAS_PHOTO_CLASS;
use crate::pdga::ProfileRecord;
use crate::ui::popup::{PopupSurface, Region};
use crate::ui::sanitize::sanitize;

/// Write a profile into the popup regions.
///
/// Every fragment comes from the remote page and goes through [`sanitize`]
/// before it reaches the surface.
pub fn render_profile<P: PopupSurface + ?Sized>(popup: &mut P, record: &ProfileRecord) {
    popup.set_inner_html(Region::Title, &sanitize(&record.title));
    popup.set_inner_html(Region::Photo, &sanitize(&record.photo));
    popup.set_inner_html(Region::Info, &sanitize(&record.info));
    popup.set_class(Region::Photo, HAS_PHOTO_CLASS, record.has_photo);
}
