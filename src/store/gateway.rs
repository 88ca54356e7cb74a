//! The persistence gateway contract.
//!
//! The engine only ever needs two store operations: an indexed-field query
//! with optional relation expansion, and an ordered, atomic create/update
//! batch. Deletes are never issued: determinations and scores live for the
//! life of the event.

use crate::error::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Collection names in the document store.
pub mod collections {
    pub const CATEGORIES: &str = "categories";
    pub const NOMINEES: &str = "nominees";
    pub const BALLOTS: &str = "ballots";
    pub const RESULTS: &str = "results";
    pub const PICKS: &str = "picks";
    pub const SCORES: &str = "scores";
}

/// Equality/membership filter on an indexed field.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Eq { field: String, value: String },
    AnyOf { field: String, values: Vec<String> },
}

/// A query against one collection: conjunction of filters, plus optional
/// relation expansion.
#[derive(Debug, Clone, Default)]
pub struct RecordQuery {
    pub filters: Vec<Filter>,
    pub expand: Option<String>,
}

impl RecordQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: &str, value: impl Into<String>) -> Self {
        self.filters.push(Filter::Eq {
            field: field.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn any_of(mut self, field: &str, values: Vec<String>) -> Self {
        self.filters.push(Filter::AnyOf {
            field: field.to_string(),
            values,
        });
        self
    }

    pub fn expand(mut self, relation: &str) -> Self {
        self.expand = Some(relation.to_string());
        self
    }
}

/// One write in a transact batch.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOp {
    Create {
        collection: &'static str,
        data: Value,
    },
    Update {
        collection: &'static str,
        id: String,
        data: Value,
    },
}

impl WriteOp {
    /// One-line description for dry-run output.
    pub fn describe(&self) -> String {
        match self {
            WriteOp::Create { collection, data } => format!("create {collection}: {data}"),
            WriteOp::Update { collection, id, data } => {
                format!("update {collection}/{id}: {data}")
            }
        }
    }
}

/// The transactional document store, as consumed by this engine.
#[async_trait]
pub trait Gateway {
    /// Fetch all records of `collection` matching `query`.
    async fn query(&self, collection: &str, query: RecordQuery) -> Result<Vec<Value>>;

    /// Apply an ordered batch of writes atomically: all or nothing.
    async fn transact(&self, ops: Vec<WriteOp>) -> Result<()>;
}

/// Query a collection and deserialize each record into `T`.
pub async fn query_as<T, G>(gw: &G, collection: &str, query: RecordQuery) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    G: Gateway + Sync + ?Sized,
{
    let raw = gw.query(collection, query).await?;
    raw.into_iter()
        .map(|v| serde_json::from_value(v).map_err(Into::into))
        .collect()
}
