//! Gilded Avenue Core - Shared types library.
//!
//! This crate provides the domain types used across all Gilded Avenue
//! components:
//! - `engine` - The catalog query engine
//! - `cli` - Command-line tools for catalog inspection and validation
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no clock access, no
//! catalog logic. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Store records, identifiers, price tiers, coordinates,
//!   and weekly hours tables

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
