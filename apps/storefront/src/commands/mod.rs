//! # Session Commands
//!
//! All handlers the page wires its user actions to.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── cart.rs     ◄─── add_product, remove_item, toggle_drawer
//! ├── service.rs  ◄─── request_service, confirm_service, cancel_service
//! └── checkout.rs ◄─── finalize_purchase
//! ```
//!
//! ## How Commands Work
//! Every command is a method on [`crate::Session`] invoked from a page
//! event (a click) and running to completion before the next event is
//! processed. Commands orchestrate only: state mutation lives in
//! `petshop-core`, presentation goes through the collaborator traits.
//!
//! Failures never escape a command. Parse failures log a diagnostic and
//! abort; stale triggers (remove of a gone item, confirm with no popup)
//! are quiet no-ops; the empty-cart finalize is a guided no-op with a
//! notification. Nothing here panics.

mod cart;
mod checkout;
mod service;
