//! Bonbon Core - Shared types library.
//!
//! This crate provides common types used across all Bonbon components:
//! - `engine` - Catalogue, cart store, screen renderer and action router
//! - `gateway` - Transport-adapter HTTP shell
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no locks, no HTTP. Everything
//! that crosses a component boundary (keys, prices, parsed actions, rendered
//! screens) lives here so the engine and the gateway agree on one vocabulary.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe keys, session ids and prices
//! - [`action`] - Parsed user intents and their single parse boundary
//! - [`screen`] - Rendered screens, button grids and transient notices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod action;
pub mod screen;
pub mod types;

pub use action::*;
pub use screen::*;
pub use types::*;
