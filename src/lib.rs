//! `ExchangeBuddy` - a Discord bot for USDT/INR exchange bookkeeping
//!
//! This crate provides a single-guild currency exchange helper accessible
//! via Discord: conversions between USDT and INR at an admin-configurable
//! rate, cumulative per-user and global totals persisted in a JSON ledger,
//! an optional log-channel echo of every conversion, and a liveness route
//! for uptime probing.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    unsafe_code,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Discord bot interface - commands, notifier, and bot context
pub mod bot;
/// Runtime settings loaded from the environment
pub mod config;
/// Core business logic - framework-agnostic conversion and reporting
pub mod core;
/// Unified error types and result handling
pub mod errors;
/// Liveness endpoint for uptime probes
pub mod health;
/// The persisted exchange ledger document
pub mod ledger;
/// Durable ledger store with serialized access and atomic writes
pub mod store;

#[cfg(test)]
pub mod test_utils;
