//! ID types for the awards-pool engine.
//!
//! Record ids in the document store are opaque strings; these wrappers keep
//! them from being mixed up across collections.

use crate::error::{PoolError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }
    };
}

string_id! {
    /// One award category within an event.
    CategoryId
}

string_id! {
    /// One candidate within a category.
    NomineeId
}

string_id! {
    /// A contest participant.
    UserId
}

string_id! {
    /// A league a participant competes in.
    LeagueId
}

string_id! {
    /// One awards ceremony instance, e.g. `sag-2024`.
    ///
    /// The ceremony year is carried as a trailing 4-digit suffix; [`EventId::year`]
    /// extracts it.
    EventId
}

impl EventId {
    /// Resolve the ceremony year from the trailing 4-digit suffix.
    ///
    /// `sag-2024` → 2024. An id without such a suffix is a caller-input
    /// error, raised before any network activity.
    pub fn year(&self) -> Result<u16> {
        let digits: Vec<char> = self
            .0
            .chars()
            .rev()
            .take_while(|c| c.is_ascii_digit())
            .take(4)
            .collect();
        if digits.len() < 4 {
            return Err(PoolError::InvalidEventId {
                event_id: self.0.clone(),
            });
        }
        let year: String = digits.into_iter().rev().collect();
        year.parse().map_err(|_| PoolError::InvalidEventId {
            event_id: self.0.clone(),
        })
    }
}
