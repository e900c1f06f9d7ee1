//! # Service Commands
//!
//! The confirmation-gated path into the cart. Products go straight in;
//! services pass through an explicit user decision first.

use tracing::{debug, error, warn};

use crate::adapters::ServiceAction;
use crate::state::{ConfirmationError, Session};

impl Session {
    /// Opens the confirmation popup for a service trigger.
    ///
    /// ## Behavior
    /// - Parses the trigger's price metadata
    /// - Stages the candidate in the confirmation flow
    /// - Shows the popup with the candidate's name and formatted price
    ///
    /// ## Failure
    /// - Unparseable price: diagnostic log, nothing else happens
    /// - A candidate already pending: the new request is rejected and the
    ///   open popup (and its candidate) stays untouched
    pub fn request_service(&mut self, action: &ServiceAction) {
        debug!(name = %action.name, "request_service command");

        let price = match action.parse_price() {
            Ok(price) => price,
            Err(err) => {
                error!(%err, price_attr = %action.price_attr, "could not parse service price");
                return;
            }
        };

        match self.confirmation.request(&action.name, price) {
            Ok(prompt) => self.surface.show_confirmation(&prompt),
            Err(ConfirmationError::AlreadyAwaiting { pending }) => {
                warn!(%pending, requested = %action.name, "confirmation already open, request dropped");
            }
        }
    }

    /// Accepts the pending service: it enters the cart like any item.
    ///
    /// A confirm with no pending candidate (stale trigger) is a quiet
    /// no-op.
    pub fn confirm_service(&mut self) {
        debug!("confirm_service command");

        let Some(candidate) = self.confirmation.confirm() else {
            debug!("confirm with no pending confirmation ignored");
            return;
        };

        self.surface.hide_confirmation();
        match self.cart.add(&candidate.name, candidate.price) {
            Ok(_) => {
                self.render();
                self.notify(&format!("\"{}\" added to cart!", candidate.name));
            }
            Err(err) => {
                // Metadata validated at parse time; a reject here means a
                // mangled trigger (e.g. empty name). Same silent posture
                // as a parse failure.
                error!(%err, name = %candidate.name, "confirmed service rejected by cart");
            }
        }
    }

    /// Declines the pending service; nothing enters the cart.
    pub fn cancel_service(&mut self) {
        debug!("cancel_service command");

        if self.confirmation.cancel().is_some() {
            self.surface.hide_confirmation();
        } else {
            debug!("cancel with no pending confirmation ignored");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
