//! # Confirmation Flow
//!
//! Gates service additions behind an explicit user decision.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                                                                     │
//! │            request(name, price)                                     │
//! │   ┌──────┐ ───────────────────► ┌──────────────────────┐            │
//! │   │ Idle │                      │ Awaiting(candidate)  │            │
//! │   └──────┘ ◄─────────────────── └──────────────────────┘            │
//! │            confirm / cancel                                         │
//! │                                                                     │
//! │   confirm/cancel while Idle: stale trigger, no-op                   │
//! │   request while Awaiting:    rejected (AlreadyAwaiting)             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The prompt handed to the surface is built from the current candidate
//! at request time, so accept/cancel actions always close over exactly
//! that candidate — there is no handler state to go stale between
//! requests.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use petshop_core::Money;

use crate::view::display_price;

/// A service awaiting the user's decision. Not yet in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub name: String,
    pub price: Money,
}

/// What the confirmation popup displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationPrompt {
    /// Candidate service name.
    pub name: String,

    /// Formatted candidate price, e.g. `"R$ 40,00"`.
    pub price: String,

    /// Full question shown in the popup body.
    pub message: String,
}

/// A confirmation request could not be opened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfirmationError {
    /// One candidate is already awaiting a decision. The first popup and
    /// its candidate stay untouched; the new request is dropped.
    #[error("'{pending}' is already awaiting confirmation")]
    AlreadyAwaiting { pending: String },
}

/// Two-state workflow gating service additions.
///
/// At most one candidate is pending at a time. The flow itself has no
/// side effects: commands own cart mutation and presentation around the
/// transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfirmationFlow {
    #[default]
    Idle,
    Awaiting(Candidate),
}

impl ConfirmationFlow {
    /// `Idle → Awaiting`: stages the candidate and returns the prompt to
    /// display.
    ///
    /// While a candidate is pending, further requests are rejected and
    /// the pending candidate is left untouched.
    pub fn request(
        &mut self,
        name: &str,
        price: Money,
    ) -> Result<ConfirmationPrompt, ConfirmationError> {
        if let ConfirmationFlow::Awaiting(pending) = self {
            return Err(ConfirmationError::AlreadyAwaiting {
                pending: pending.name.clone(),
            });
        }

        let price_display = display_price(price);
        let prompt = ConfirmationPrompt {
            name: name.to_string(),
            price: price_display.clone(),
            message: format!("Do you really want to hire \"{name}\" for {price_display}?"),
        };

        *self = ConfirmationFlow::Awaiting(Candidate {
            name: name.to_string(),
            price,
        });
        Ok(prompt)
    }

    /// `Awaiting → Idle`, yielding the accepted candidate.
    ///
    /// Returns `None` when already idle: a stale confirm trigger is a
    /// no-op, not an error.
    pub fn confirm(&mut self) -> Option<Candidate> {
        match std::mem::take(self) {
            ConfirmationFlow::Awaiting(candidate) => Some(candidate),
            ConfirmationFlow::Idle => None,
        }
    }

    /// `Awaiting → Idle`, discarding the candidate.
    ///
    /// Returns the discarded candidate so callers can tell a real cancel
    /// from a stale trigger (`None`).
    pub fn cancel(&mut self) -> Option<Candidate> {
        match std::mem::take(self) {
            ConfirmationFlow::Awaiting(candidate) => Some(candidate),
            ConfirmationFlow::Idle => None,
        }
    }

    /// True while a candidate awaits a decision.
    pub fn is_awaiting(&self) -> bool {
        matches!(self, ConfirmationFlow::Awaiting(_))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_stages_candidate_and_builds_prompt() {
        let mut flow = ConfirmationFlow::default();
        let prompt = flow.request("Banho", Money::from_cents(4990)).unwrap();

        assert!(flow.is_awaiting());
        assert_eq!(prompt.name, "Banho");
        assert_eq!(prompt.price, "R$ 49,90");
        assert_eq!(
            prompt.message,
            "Do you really want to hire \"Banho\" for R$ 49,90?"
        );
    }

    #[test]
    fn test_confirm_yields_exactly_the_staged_candidate() {
        let mut flow = ConfirmationFlow::default();
        flow.request("Banho", Money::from_cents(4990)).unwrap();

        let candidate = flow.confirm().unwrap();
        assert_eq!(candidate.name, "Banho");
        assert_eq!(candidate.price, Money::from_cents(4990));
        assert!(!flow.is_awaiting());
    }

    #[test]
    fn test_cancel_discards_and_returns_to_idle() {
        let mut flow = ConfirmationFlow::default();
        flow.request("Tosa", Money::from_cents(3550)).unwrap();

        assert!(flow.cancel().is_some());
        assert!(!flow.is_awaiting());
        assert!(flow.confirm().is_none());
    }

    #[test]
    fn test_stale_confirm_and_cancel_are_noops() {
        let mut flow = ConfirmationFlow::default();
        assert!(flow.confirm().is_none());
        assert!(flow.cancel().is_none());
        assert!(!flow.is_awaiting());
    }

    #[test]
    fn test_second_request_is_rejected_and_first_kept() {
        let mut flow = ConfirmationFlow::default();
        flow.request("Banho", Money::from_cents(4000)).unwrap();

        let err = flow.request("Tosa", Money::from_cents(3550)).unwrap_err();
        assert_eq!(
            err,
            ConfirmationError::AlreadyAwaiting {
                pending: "Banho".to_string()
            }
        );

        // First candidate survives the rejected request.
        let candidate = flow.confirm().unwrap();
        assert_eq!(candidate.name, "Banho");
    }

    #[test]
    fn test_flow_cycles_for_the_page_lifetime() {
        let mut flow = ConfirmationFlow::default();
        for _ in 0..3 {
            flow.request("Banho", Money::from_cents(4000)).unwrap();
            assert!(flow.confirm().is_some());
        }
    }
}
