//! # State Module
//!
//! Session state for the storefront page.
//!
//! Instead of one grab-bag state object, each concern gets its own type:
//!
//! - [`Session`] — the owned aggregate the host constructs at page load:
//!   cart, confirmation flow, drawer flag, collaborators
//! - [`ConfirmationFlow`] — the two-state workflow gating services
//! - [`Toast`] — deadline model backing the notification banner
//!
//! The cart itself lives in `petshop-core`; this module owns everything
//! that is session-shaped rather than domain-shaped.

mod confirmation;
mod notifier;
mod session;

pub use confirmation::{Candidate, ConfirmationError, ConfirmationFlow, ConfirmationPrompt};
pub use notifier::Toast;
pub use session::Session;
