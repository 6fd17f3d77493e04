// Path: crates/ticket/src/lib.rs
//! # Ticketchain Ticket Crate Lints
//!
//! This crate enforces a strict set of lints to ensure high-quality,
//! panic-free, and well-documented code. Panics are disallowed in non-test
//! code to promote robust error handling.
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # Ticketchain Ticket
//!
//! The ticket lifecycle and top-N proposer aggregation: purchase
//! indexing, maturity/expiry predicates, and the value-sum queries the
//! unbond and validator-set-refresh executors depend on.

/// Mature/active/live predicate functions over a single ticket.
pub mod lifecycle;
/// The `TicketManager` facade composing the ticket store with its
/// collaborator keepers.
pub mod manager;

pub use lifecycle::{is_active, is_expired, is_immature, is_live, is_mature};
pub use manager::{SelectedTicket, TicketManager, TicketPurchase};
