//! scalegate core: broker-facing contracts, error types, and the policy
//! document model.
//!
//! This crate defines the data shapes shared by the broker service and SDK
//! tooling: the scaling-policy document submitted by clients, the violation
//! record produced by plan-limit validation, and the error surface. It
//! intentionally carries no transport or runtime dependencies so it can be
//! reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `ScaleGateError`/`Result` so production
//! processes do not crash on malformed input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod policy;

/// Shared result type.
pub use error::{Result, ScaleGateError};
