//! String-token identifier wrappers.
//!
//! Stations and trains are named by free-form tokens in the input tables.
//! Wrapping them in distinct newtypes keeps a station from being passed where
//! a train id is expected.  Both are `Ord + Hash` so they work as map keys and
//! sort keys without ceremony.

use std::fmt;

use crate::FormatError;

/// Generate a typed wrapper around an owned, trimmed, non-blank token.
macro_rules! token_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident, $what:literal;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(String);

        impl $name {
            /// Wrap `token` as-is.  Prefer [`parse`](Self::parse) for raw input.
            pub fn new(token: impl Into<String>) -> Self {
                Self(token.into())
            }

            /// Trim surrounding whitespace and reject blank tokens.
            pub fn parse(raw: &str) -> Result<Self, FormatError> {
                let token = raw.trim();
                if token.is_empty() {
                    return Err(FormatError::BlankToken { what: $what });
                }
                Ok(Self(token.to_owned()))
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }
    };
}

token_id! {
    /// A node of the track network.
    pub struct Station, "station";
}

token_id! {
    /// A vehicle's identifier, as given in the requests table.
    pub struct TrainId, "train id";
}
