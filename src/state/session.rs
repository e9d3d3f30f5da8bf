// SPDX-License-Identifier: MPL-2.0

use tokio::task::JoinHandle;

/// Timer bookkeeping for the hover controller.
///
/// Holds at most one show timer and one hide timer. Arming a timer always
/// aborts the previous one of the same kind.
#[derive(Default)]
pub struct HoverSession {
    show_timer: Option<JoinHandle<()>>,
    hide_timer: Option<JoinHandle<()>>,
}

impl HoverSession {
    pub fn arm_show(&mut self, timer: JoinHandle<()>) {
        self.cancel_show();
        self.show_timer = Some(timer);
    }

    pub fn arm_hide(&mut self, timer: JoinHandle<()>) {
        self.cancel_hide();
        self.hide_timer = Some(timer);
    }

    pub fn cancel_show(&mut self) {
        if let Some(timer) = self.show_timer.take() {
            timer.abort();
        }
    }

    pub fn cancel_hide(&mut self) {
        if let Some(timer) = self.hide_timer.take() {
            timer.abort();
        }
    }

    pub fn show_pending(&self) -> bool {
        self.show_timer.as_ref().is_some_and(|t| !t.is_finished())
    }

    pub fn hide_pending(&self) -> bool {
        self.hide_timer.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for HoverSession {
    fn drop(&mut self) {
        self.cancel_show();
        self.cancel_hide();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn sleeper() -> JoinHandle<()> {
        tokio::spawn(tokio::time::sleep(Duration::from_secs(60)))
    }

    #[tokio::test(start_paused = true)]
    async fn test_arming_replaces_previous_timer() {
        let mut session = HoverSession::default();
        let first = sleeper();
        let first_abort = first.abort_handle();
        session.arm_show(first);
        session.arm_show(sleeper());

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert!(first_abort.is_finished());
        assert!(session.show_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_clears_pending() {
        let mut session = HoverSession::default();
        session.arm_hide(sleeper());
        assert!(session.hide_pending());

        session.cancel_hide();
        assert!(!session.hide_pending());
        assert!(!session.show_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fired_timer_is_not_pending() {
        let mut session = HoverSession::default();
        session.arm_show(tokio::spawn(async {}));
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert!(!session.show_pending());
    }
}
