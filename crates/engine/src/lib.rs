//! Bonbon Engine - the conversational storefront core.
//!
//! This crate holds everything with real state-transition semantics:
//!
//! - [`catalogue`] - immutable registry of categories and items, built once at
//!   startup and shared read-only across all sessions
//! - [`cart`] - a session's accumulated item quantities
//! - [`sessions`] - per-session state store with a strict same-session
//!   serialization contract
//! - [`render`] - pure functions mapping state to screens (text + buttons)
//! - [`router`] - the action state machine deciding, for any incoming user
//!   action, what to render next and how the cart mutates
//!
//! The engine performs no I/O: the transport adapter (see `bonbon-gateway`)
//! delivers parsed actions in and carries rendered screens out.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalogue;
pub mod render;
pub mod router;
pub mod sessions;

pub use cart::Cart;
pub use catalogue::{Catalogue, CatalogueError, Category, Item};
pub use router::ShopEngine;
pub use sessions::{SessionState, SessionStore};
