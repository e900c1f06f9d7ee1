//! # Checkout Command
//!
//! Purchase finalization: the only path that empties a non-empty cart.

use tracing::{debug, info};

use crate::state::Session;
use crate::view::display_price;

impl Session {
    /// Finalizes the purchase.
    ///
    /// ## Behavior
    /// - Empty cart: a guided no-op — notification plus pulse, the
    ///   acknowledgment channel is NOT invoked, the cart stays empty
    /// - Otherwise: one blocking acknowledgment carrying the finalized
    ///   total, then the cart is cleared, the empty view re-rendered,
    ///   and the drawer closed
    pub fn finalize_purchase(&mut self) {
        debug!("finalize_purchase command");

        if self.cart.is_empty() {
            self.notify("Your cart is empty!");
            return;
        }

        let total = self.cart.total();
        info!(total = %total, items = self.cart.len(), "purchase finalized");

        self.checkout.acknowledge(&format!(
            "Purchase completed successfully! Total: {}. Thank you for choosing Mundo Pet!",
            display_price(total)
        ));

        self.cart.clear();
        self.render();
        self.set_drawer_open(false);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
