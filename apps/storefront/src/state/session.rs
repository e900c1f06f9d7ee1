//! # Session State
//!
//! The page session: one explicitly owned object holding the cart, the
//! confirmation flow, and the drawer flag, wired to the collaborators the
//! host supplied.
//!
//! ## Threading
//! The session runs single-threaded on the page's event loop. Each
//! command (see [`crate::commands`]) is a run-to-completion handler for
//! one discrete user action; no handler blocks or suspends, and nothing
//! here needs locking.

use tracing::debug;

use petshop_core::Cart;

use crate::surface::{CheckoutAck, DisplaySurface, NotificationSink};
use crate::view::CartView;
use crate::CART_PULSE_FOR;

use super::ConfirmationFlow;

/// Owned state and collaborators for one page session.
///
/// Construct it once at page load; it lives for the page lifetime. The
/// cart starts empty and the initial (empty) view is rendered
/// immediately, mirroring the page's first paint.
pub struct Session {
    pub(crate) cart: Cart,
    pub(crate) confirmation: ConfirmationFlow,
    pub(crate) drawer_open: bool,
    pub(crate) surface: Box<dyn DisplaySurface>,
    pub(crate) toast: Box<dyn NotificationSink>,
    pub(crate) checkout: Box<dyn CheckoutAck>,
}

impl Session {
    /// Creates a session with an empty cart and renders the initial view.
    pub fn new(
        surface: Box<dyn DisplaySurface>,
        toast: Box<dyn NotificationSink>,
        checkout: Box<dyn CheckoutAck>,
    ) -> Self {
        let mut session = Session {
            cart: Cart::new(),
            confirmation: ConfirmationFlow::default(),
            drawer_open: false,
            surface,
            toast,
            checkout,
        };
        session.render();
        session
    }

    /// Read access to the cart (the session's single source of truth).
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current projection of the cart.
    pub fn view(&self) -> CartView {
        CartView::project(&self.cart)
    }

    /// True while a service confirmation popup is open.
    pub fn is_awaiting_confirmation(&self) -> bool {
        self.confirmation.is_awaiting()
    }

    /// Whether the cart drawer is currently open.
    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Rebuilds the displayed list from current cart contents.
    pub(crate) fn render(&mut self) {
        let view = CartView::project(&self.cart);
        self.surface.show_cart(&view);
    }

    /// Shows a transient banner and pulses the cart as a secondary cue.
    pub(crate) fn notify(&mut self, message: &str) {
        self.toast.notify(message);
        self.surface.pulse(CART_PULSE_FOR);
    }

    /// Opens or closes the drawer, propagating to the surface.
    pub(crate) fn set_drawer_open(&mut self, open: bool) {
        if self.drawer_open != open {
            debug!(open, "cart drawer state changed");
        }
        self.drawer_open = open;
        self.surface.set_drawer_open(open);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
