//! Shared CLI value types.

pub mod ids;

pub use ids::{CategoryId, EventId, LeagueId, NomineeId, UserId};
