//! Velvet Fig Core - Shared types library.
//!
//! This crate provides common types used across all Velvet Fig components:
//! - `storefront` - The storefront state engine embedded by UI shells
//! - `integration-tests` - Cross-crate tests over real persistence
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no persistence, no
//! catalog data. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
