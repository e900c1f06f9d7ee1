//! # Toast Banner State
//!
//! Deadline model for the transient notification banner.
//!
//! The banner holds one message at a time. Showing a message overwrites
//! the text and restarts the hide deadline ([`crate::TOAST_VISIBLE_FOR`]
//! from now); there is no queue, and a rapid burst of notifications
//! simply extends effective visibility. Timers are fire-once deadlines
//! evaluated against a caller-supplied instant, which keeps the model
//! pure and lets the host drive hiding from its own loop.

use std::time::Instant;

use crate::TOAST_VISIBLE_FOR;

/// The toast banner's state: latest message plus its hide deadline.
#[derive(Debug, Clone, Default)]
pub struct Toast {
    message: String,
    hide_at: Option<Instant>,
}

impl Toast {
    /// Creates a banner with nothing to show.
    pub fn new() -> Self {
        Toast::default()
    }

    /// Overwrites the banner text and restarts the hide deadline.
    pub fn show(&mut self, message: &str, now: Instant) {
        self.message = message.to_string();
        self.hide_at = Some(now + TOAST_VISIBLE_FOR);
    }

    /// The visible message at `now`, or `None` once the deadline passed.
    pub fn message_at(&self, now: Instant) -> Option<&str> {
        match self.hide_at {
            Some(deadline) if now < deadline => Some(&self.message),
            _ => None,
        }
    }

    /// True while the banner should be displayed.
    pub fn is_visible(&self, now: Instant) -> bool {
        self.message_at(now).is_some()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_banner_hides_after_deadline() {
        let t0 = Instant::now();
        let mut toast = Toast::new();
        toast.show("Item added to cart!", t0);

        assert_eq!(toast.message_at(t0), Some("Item added to cart!"));
        assert!(toast.is_visible(t0 + Duration::from_millis(1999)));
        assert!(!toast.is_visible(t0 + Duration::from_millis(2000)));
    }

    #[test]
    fn test_new_message_overwrites_and_restarts_timer() {
        let t0 = Instant::now();
        let mut toast = Toast::new();
        toast.show("first", t0);
        toast.show("second", t0 + Duration::from_millis(1500));

        // Only the latest text is ever visible; no queue.
        let t = t0 + Duration::from_millis(1600);
        assert_eq!(toast.message_at(t), Some("second"));

        // The restarted window outlives the first message's deadline.
        let t = t0 + Duration::from_millis(3000);
        assert_eq!(toast.message_at(t), Some("second"));
        assert!(!toast.is_visible(t0 + Duration::from_millis(3600)));
    }

    #[test]
    fn test_fresh_banner_shows_nothing() {
        let toast = Toast::new();
        assert!(!toast.is_visible(Instant::now()));
    }
}
