//! Core types for Bonbon.
//!
//! Newtype wrappers that prevent mixing up the stringly-typed identifiers
//! flowing through the chat protocol, plus the integer price type.

pub mod key;
pub mod price;

pub use key::{CategoryKey, ItemId, KeyError, MAX_KEY_LENGTH, SessionId};
pub use price::Price;
