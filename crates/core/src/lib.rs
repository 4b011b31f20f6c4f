//! Cart Store Core - Shared types library.
//!
//! This crate provides the value types shared by every cart store component:
//! - `storefront` - The cart store itself, its catalog and key-value seams
//! - `cli` - Command-line host for the cart store
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no logging.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, prices, quantities, plus
//!   the catalog [`Product`] and the [`CartLine`] copied from it

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
