//! Newtype keys for type-safe entity references.
//!
//! Use the `define_key!` macro to create type-safe wrappers around the string
//! keys that travel inside button payloads, so a category key can never be
//! handed to an item lookup by accident.

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a key.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The input string is empty.
    #[error("key cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("key must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside `[a-z0-9_-]`.
    #[error("key contains invalid character {ch:?}")]
    InvalidChar {
        /// The offending character.
        ch: char,
    },
}

/// Maximum length of a catalogue key.
///
/// Keys are embedded in button payloads, which chat transports cap at small
/// sizes, so keep them short.
pub const MAX_KEY_LENGTH: usize = 64;

/// Macro to define a type-safe string key wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `parse()` validation (non-empty, length-capped, `[a-z0-9_-]` only)
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - `as_str()`, `Display`, `FromStr` and `AsRef<str>` implementations
///
/// # Example
///
/// ```rust
/// # use bonbon_core::{CategoryKey, ItemId};
/// let key = CategoryKey::parse("chocolate").unwrap();
/// let id = ItemId::parse("milk_chocolate").unwrap();
///
/// // These are different types, so this won't compile:
/// // let _: CategoryKey = id;
/// ```
#[macro_export]
macro_rules! define_key {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Parse a key from a string.
            ///
            /// # Errors
            ///
            /// Returns a [`KeyError`] if the input is empty, longer than
            /// [`MAX_KEY_LENGTH`], or contains a character outside
            /// `[a-z0-9_-]`.
            pub fn parse(s: &str) -> Result<Self, $crate::types::key::KeyError> {
                if s.is_empty() {
                    return Err($crate::types::key::KeyError::Empty);
                }
                if s.len() > $crate::types::key::MAX_KEY_LENGTH {
                    return Err($crate::types::key::KeyError::TooLong {
                        max: $crate::types::key::MAX_KEY_LENGTH,
                    });
                }
                if let Some(ch) = s
                    .chars()
                    .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-'))
                {
                    return Err($crate::types::key::KeyError::InvalidChar { ch });
                }
                Ok(Self(s.to_owned()))
            }

            /// Returns the key as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the key and returns its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::types::key::KeyError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<$name> for String {
            fn from(key: $name) -> Self {
                key.0
            }
        }
    };
}

define_key!(ItemId, "Identifier of a catalogue item, globally unique across categories.");
define_key!(CategoryKey, "Key of a catalogue category.");

/// Opaque session identity supplied by the transport layer.
///
/// The engine never interprets the value; it only keys the session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(i64);

impl SessionId {
    /// Create a new session ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying i64 value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for SessionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SessionId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<SessionId> for i64 {
    fn from(id: SessionId) -> Self {
        id.0
    }
}
