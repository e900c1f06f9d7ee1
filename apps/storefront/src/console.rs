//! # Console Collaborators
//!
//! Terminal implementations of the page collaborators, used by the demo
//! binary. A real storefront binds these traits to its markup; here the
//! "display surface" is stdout and the pulse is a log line.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::state::{ConfirmationPrompt, Toast};
use crate::surface::{CheckoutAck, DisplaySurface, NotificationSink};
use crate::view::{CartView, EMPTY_CART_PLACEHOLDER};

/// Renders the cart as a plain-text block on stdout.
#[derive(Debug, Default)]
pub struct ConsoleSurface;

impl DisplaySurface for ConsoleSurface {
    fn show_cart(&mut self, view: &CartView) {
        println!("┌─ Cart ─────────────────────────────");
        if view.is_empty() {
            println!("│ {EMPTY_CART_PLACEHOLDER}");
        } else {
            for row in &view.rows {
                println!("│ {:<24} {:>10}  [x]", row.name, row.price);
            }
            if let Some(total) = &view.total {
                println!("│ ──────────────────────────────────");
                println!("│ Total: {total}");
            }
        }
        println!("└────────────────────────────────────");
    }

    fn set_drawer_open(&mut self, open: bool) {
        debug!(open, "console drawer");
    }

    fn pulse(&mut self, duration: Duration) {
        debug!(?duration, "console cart pulse");
    }

    fn show_confirmation(&mut self, prompt: &ConfirmationPrompt) {
        println!("?? {} [confirm/cancel]", prompt.message);
    }

    fn hide_confirmation(&mut self) {
        debug!("console confirmation closed");
    }
}

/// Prints toast messages and tracks visibility with the [`Toast`] model.
#[derive(Debug, Default)]
pub struct ConsoleToast {
    toast: Toast,
}

impl ConsoleToast {
    pub fn new() -> Self {
        ConsoleToast::default()
    }

    /// Whether the banner would still be on screen at `now`.
    pub fn is_visible(&self, now: Instant) -> bool {
        self.toast.is_visible(now)
    }
}

impl NotificationSink for ConsoleToast {
    fn notify(&mut self, message: &str) {
        self.toast.show(message, Instant::now());
        println!(">> {message}");
    }
}

/// Prints the blocking checkout notice.
#[derive(Debug, Default)]
pub struct ConsoleCheckout;

impl CheckoutAck for ConsoleCheckout {
    fn acknowledge(&mut self, message: &str) {
        println!("== {message}");
    }
}
