//! Core components of the `bridge-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`BridgeClient`] and its builder.
//! - The primary [`BridgeError`] type.
//! - The authenticated transport and the cursor-following pagination engine.

/// The main client (`BridgeClient`), builder, and retry configuration.
pub mod client;
/// The primary error type (`BridgeError`) for the crate.
pub mod error;

pub(crate) mod net;
pub(crate) mod paging;
pub(crate) mod wire;

// convenient re-exports so most code can just `use crate::core::BridgeClient`
pub use client::{Backoff, BridgeClient, BridgeClientBuilder, RetryConfig};
pub use error::BridgeError;
