// SPDX-License-Identifier: MPL-2.0

//! Hover controller: decides when a player popup is fetched, shown and
//! dismissed.
//!
//! Pointer events arrive from the page glue. Entering a player link arms the
//! show timer; when it fires, the profile is fetched, extracted, rendered and
//! positioned as one task. Leaving the link or the popup arms the hide timer.
//! Only the timers can be cancelled. A fetch that has started always runs to
//! completion, and whichever fetch finishes last owns the popup content.

use std::sync::{Arc, Mutex};

use crate::pdga::profile::extract;
use crate::pdga::{FetchError, ProfileRef, ProfileSource};
use crate::state::{CursorOffset, HoverSession, ProfilerSettings, Timing};
use crate::ui::{Anchor, PopupSurface, anchor_for_cursor, position_popup, render_profile};

/// Observable state of the hover state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverState {
    Idle,
    /// Show timer running
    PendingShow,
    /// Popup displayed, no timer running
    Visible,
    /// Hide timer running, popup still displayed
    PendingHide,
}

/// One per page. All handlers must be called from within the tokio runtime.
pub struct HoverController<S, P> {
    source: Arc<S>,
    popup: Arc<Mutex<P>>,
    /// Profile whose content the popup currently holds
    shown: Arc<Mutex<Option<ProfileRef>>>,
    session: Mutex<HoverSession>,
    timing: Timing,
    offset: CursorOffset,
    origin: String,
    legacy_origin: String,
}

impl<S: ProfileSource, P: PopupSurface> HoverController<S, P> {
    pub fn new(source: S, popup: P, settings: &ProfilerSettings) -> Self {
        Self {
            source: Arc::new(source),
            popup: Arc::new(Mutex::new(popup)),
            shown: Arc::new(Mutex::new(None)),
            session: Mutex::new(HoverSession::default()),
            timing: settings.timing(),
            offset: settings.cursor_offset(),
            origin: settings.origin.clone(),
            legacy_origin: settings.legacy_origin.clone(),
        }
    }

    /// Shared handle to the popup surface.
    pub fn popup(&self) -> Arc<Mutex<P>> {
        self.popup.clone()
    }

    /// Pointer entered a player link. `client_x`/`client_y` are the pointer's
    /// viewport coordinates at the time of the event.
    pub fn on_link_enter(&self, href: &str, client_x: f64, client_y: f64) {
        let profile = match ProfileRef::normalize(href, &self.origin, &self.legacy_origin) {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(href, "ignoring player link: {e}");
                return;
            }
        };

        let mut session = self.session.lock().unwrap();
        session.cancel_hide();

        let (visible, viewport_height) = {
            let popup = self.popup.lock().unwrap();
            (popup.is_visible(), popup.viewport_height())
        };

        // Back on the link the popup is already showing.
        if visible
            && !session.show_pending()
            && self.shown.lock().unwrap().as_ref() == Some(&profile)
        {
            return;
        }

        let anchor = anchor_for_cursor(client_x, client_y, viewport_height, self.offset);

        let source = self.source.clone();
        let popup = self.popup.clone();
        let shown = self.shown.clone();
        let delay = self.timing.show_delay;
        session.arm_show(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Detached so that cancelling the timer never cancels the fetch.
            tokio::spawn(async move {
                if let Err(e) = display_profile(&*source, &popup, &shown, &profile, anchor).await
                {
                    tracing::warn!(%profile, "failed to display player profile: {e}");
                }
            });
        }));
    }

    /// Pointer left a player link.
    pub fn on_link_leave(&self) {
        let mut session = self.session.lock().unwrap();
        session.cancel_show();

        if self.popup.lock().unwrap().is_visible() {
            self.arm_hide(&mut session);
        }
    }

    /// Pointer entered the popup.
    pub fn on_popup_enter(&self) {
        self.session.lock().unwrap().cancel_hide();
    }

    /// Pointer left the popup.
    pub fn on_popup_leave(&self) {
        let mut session = self.session.lock().unwrap();
        self.arm_hide(&mut session);
    }

    pub fn state(&self) -> HoverState {
        let session = self.session.lock().unwrap();
        let visible = self.popup.lock().unwrap().is_visible();

        if session.show_pending() {
            HoverState::PendingShow
        } else if visible && session.hide_pending() {
            HoverState::PendingHide
        } else if visible {
            HoverState::Visible
        } else {
            HoverState::Idle
        }
    }

    fn arm_hide(&self, session: &mut HoverSession) {
        let popup = self.popup.clone();
        let delay = self.timing.hide_delay;
        session.arm_hide(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            popup.lock().unwrap().hide();
            tracing::debug!("player popup dismissed");
        }));
    }
}

/// Fetch, extract, render and position one profile.
///
/// On a fetch failure the popup is left untouched.
async fn display_profile<S, P>(
    source: &S,
    popup: &Mutex<P>,
    shown: &Mutex<Option<ProfileRef>>,
    profile: &ProfileRef,
    anchor: Anchor,
) -> Result<(), FetchError>
where
    S: ProfileSource,
    P: PopupSurface + ?Sized,
{
    let raw = source.fetch(profile).await?;
    let record = extract(&raw);

    let mut guard = popup.lock().unwrap();
    render_profile(&mut *guard, &record);
    position_popup(&mut *guard, anchor);
    *shown.lock().unwrap() = Some(profile.clone());
    tracing::debug!(%profile, has_photo = record.has_photo, "player popup shown");
    Ok(())
}
