//! Persistence gateway for the awards-pool document store.
//!
//! The store itself is an external collaborator; this module only speaks
//! its contract:
//! - `records`: typed views of the stored collections
//! - `gateway`: the query/transact trait and the typed write operations
//! - `http`: the REST client used in production
//! - `memory`: an in-process implementation for tests and dry runs

pub mod gateway;
pub mod http;
pub mod memory;
pub mod records;

pub use gateway::{collections, Filter, Gateway, RecordQuery, WriteOp};
pub use http::HttpStore;
pub use memory::MemoryStore;
