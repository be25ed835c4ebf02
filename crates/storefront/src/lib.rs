//! Velvet Fig Storefront - headless storefront state engine.
//!
//! This crate owns everything a storefront UI shell needs short of
//! rendering: the product catalog, the cart and wishlist with their
//! derived totals, the session flag, product filtering and sorting, the
//! multi-step checkout flow, and persistence of the mutable state to a
//! durable key-value medium so a restart restores the last session.
//!
//! # Architecture
//!
//! - [`state::Store`] is the single owned state object. All mutation
//!   funnels through its methods; UI consumers hold it by reference.
//! - [`persist`] abstracts the key-value medium behind the
//!   [`persist::StateStore`] trait, with file-backed and in-memory
//!   implementations.
//! - [`checkout`] sequences the Address → Payment → Confirmation flow and
//!   derives order pricing from the cart subtotal.
//!
//! There is no server, no real payment processing, and no authentication
//! backend; orders and logins are simulated client-side.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod filters;
pub mod models;
pub mod persist;
pub mod state;

pub use catalog::Catalog;
pub use checkout::{Checkout, CheckoutError, CheckoutStep, OrderConfirmation, OrderTotals};
pub use config::StorefrontConfig;
pub use filters::{ProductFilter, SortBy};
pub use models::{CartLine, Product};
pub use state::Store;
