//! # Collaborator Traits
//!
//! The storefront core never touches the page directly. Everything the
//! user sees goes through one of three capabilities the host hands to the
//! session at construction time:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Presentation Boundary                            │
//! │                                                                     │
//! │   Session ──► DisplaySurface ──► cart container, drawer, popup      │
//! │           ──► NotificationSink ─► transient toast banner            │
//! │           ──► CheckoutAck ──────► blocking purchase notice          │
//! │                                                                     │
//! │   The session calls in; it never reads back. Projections carry      │
//! │   everything a surface needs to rebuild itself.                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`crate::console`] provides reference implementations for running the
//! demo binary in a terminal; tests substitute recording fakes.

use std::time::Duration;

use crate::state::ConfirmationPrompt;
use crate::view::CartView;

/// The addressable region the cart lives in.
///
/// `show_cart` hands over a complete view; the surface is expected to
/// discard whatever it currently displays and repopulate from the rows.
/// Rows are keyed by stable line-item id, so a surface that prefers
/// keyed reconciliation over teardown can patch instead.
pub trait DisplaySurface {
    /// Replaces the displayed item list with the given view.
    fn show_cart(&mut self, view: &CartView);

    /// Opens or closes the cart drawer affordance.
    fn set_drawer_open(&mut self, open: bool);

    /// Briefly highlights the cart region as a secondary cue.
    fn pulse(&mut self, duration: Duration);

    /// Opens the service confirmation popup with the given prompt.
    fn show_confirmation(&mut self, prompt: &ConfirmationPrompt);

    /// Closes the service confirmation popup.
    fn hide_confirmation(&mut self);
}

/// Transient visible acknowledgment of a session event.
///
/// Concurrent calls overwrite the banner's text and restart its hide
/// timer; there is no queue of messages.
pub trait NotificationSink {
    /// Displays the message in the transient banner.
    fn notify(&mut self, message: &str);
}

/// Opaque acknowledgment channel for a finalized purchase.
///
/// Invoked exactly once per successful finalize, with a message that
/// contains the finalized total. Never invoked for an empty-cart
/// finalize.
pub trait CheckoutAck {
    /// Delivers the blocking checkout notice.
    fn acknowledge(&mut self, message: &str);
}
