//! # Storefront Session Library
//!
//! Page-session layer for the Mundo Pet storefront cart.
//!
//! ## Module Organization
//! ```text
//! storefront/
//! ├── lib.rs          ◄─── You are here (exports, constants, tracing setup)
//! ├── surface.rs      ◄─── Collaborator traits (display, toast, checkout)
//! ├── console.rs      ◄─── Console implementations of the collaborators
//! ├── view.rs         ◄─── Cart view projection (full rebuild, keyed rows)
//! ├── adapters.rs     ◄─── Product/service input parsing
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Owned session state (cart + flow + drawer)
//! │   ├── confirmation.rs ◄─ Confirmation state machine
//! │   └── notifier.rs ◄─── Toast banner deadline model
//! └── commands/
//!     ├── mod.rs      ◄─── Command exports
//!     ├── cart.rs     ◄─── Product add / item removal / drawer toggle
//!     ├── service.rs  ◄─── Service confirmation flow commands
//!     └── checkout.rs ◄─── Purchase finalization
//! ```
//!
//! ## Session Model
//! Everything runs single-threaded on the page's event loop: each command
//! is a run-to-completion handler for one discrete user action. Session
//! state is an explicitly owned [`state::Session`] object constructed by
//! the host — never ambient globals. Timers (toast hide, cart pulse) are
//! fire-once deadlines the host evaluates against its own clock.

pub mod adapters;
pub mod commands;
pub mod console;
pub mod state;
pub mod surface;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

use std::time::Duration;

use tracing_subscriber::EnvFilter;

pub use state::Session;

// =============================================================================
// Page Behavior Constants
// =============================================================================

/// How long a toast banner stays visible after its latest message.
///
/// A new message overwrites the text and restarts this window; there is
/// no queue of banners.
pub const TOAST_VISIBLE_FOR: Duration = Duration::from_millis(2000);

/// Duration of the cart pulse cue that accompanies every notification.
pub const CART_PULSE_FOR: Duration = Duration::from_millis(300);

// =============================================================================
// Logging Setup
// =============================================================================

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Show trace for this crate only
/// - Default: INFO, DEBUG for the storefront crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug,petshop_core=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
