//! In-process implementation of the gateway contract.
//!
//! Backs the integration tests and `--dry-run` experiments with the same
//! query/transact semantics the REST store provides: conjunctive filters,
//! relation expansion, and all-or-nothing batches.

use crate::error::{PoolError, Result};
use crate::store::gateway::{Filter, Gateway, RecordQuery, WriteOp};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
struct Inner {
    collections: HashMap<String, Vec<Value>>,
    next_id: u64,
    ops_applied: usize,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert records as-is; callers supply ids.
    pub fn seed(&self, collection: &str, records: Vec<Value>) {
        let mut inner = self.inner.lock().unwrap();
        inner
            .collections
            .entry(collection.to_string())
            .or_default()
            .extend(records);
    }

    /// Snapshot of a collection's records.
    pub fn records(&self, collection: &str) -> Vec<Value> {
        let inner = self.inner.lock().unwrap();
        inner
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Total write operations applied across all transact calls.
    pub fn ops_applied(&self) -> usize {
        self.inner.lock().unwrap().ops_applied
    }
}

#[async_trait]
impl Gateway for MemoryStore {
    async fn query(&self, collection: &str, query: RecordQuery) -> Result<Vec<Value>> {
        let inner = self.inner.lock().unwrap();
        let records = inner
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default();

        let mut matched: Vec<Value> = records
            .into_iter()
            .filter(|r| query.filters.iter().all(|f| filter_matches(r, f)))
            .collect();

        if let Some(relation) = &query.expand {
            for record in &mut matched {
                expand_relation(record, relation, &inner.collections);
            }
        }
        Ok(matched)
    }

    async fn transact(&self, ops: Vec<WriteOp>) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();

        // Atomicity: reject the whole batch before touching anything.
        for op in &ops {
            if let WriteOp::Update { collection, id, .. } = op {
                let exists = inner
                    .collections
                    .get(*collection)
                    .map(|records| records.iter().any(|r| record_id(r) == Some(id.as_str())))
                    .unwrap_or(false);
                if !exists {
                    return Err(PoolError::Store {
                        message: format!("update target {collection}/{id} does not exist"),
                    });
                }
            }
        }

        for op in ops {
            match op {
                WriteOp::Create { collection, data } => {
                    inner.next_id += 1;
                    let mut record = data;
                    if let Value::Object(obj) = &mut record {
                        obj.entry("id".to_string())
                            .or_insert_with(|| Value::String(format!("rec{}", inner.next_id)));
                    }
                    inner
                        .collections
                        .entry(collection.to_string())
                        .or_default()
                        .push(record);
                }
                WriteOp::Update { collection, id, data } => {
                    if let Some(records) = inner.collections.get_mut(collection) {
                        if let Some(target) = records
                            .iter_mut()
                            .find(|r| record_id(r) == Some(id.as_str()))
                        {
                            merge_fields(target, &data);
                        }
                    }
                }
            }
            inner.ops_applied += 1;
        }
        Ok(())
    }
}

fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

fn field_as_string(record: &Value, field: &str) -> Option<String> {
    match record.get(field)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn filter_matches(record: &Value, filter: &Filter) -> bool {
    match filter {
        Filter::Eq { field, value } => field_as_string(record, field).as_deref() == Some(value),
        Filter::AnyOf { field, values } => field_as_string(record, field)
            .map(|v| values.contains(&v))
            .unwrap_or(false),
    }
}

/// Relation fields are named after their target record; map them back to
/// the collection that holds it.
fn relation_collection(field: &str) -> Option<&'static str> {
    match field {
        "ballot" => Some("ballots"),
        "category" => Some("categories"),
        "nominee" | "winner" => Some("nominees"),
        _ => None,
    }
}

fn expand_relation(record: &mut Value, relation: &str, collections: &HashMap<String, Vec<Value>>) {
    let Some(target_collection) = relation_collection(relation) else {
        return;
    };
    let Some(target_id) = field_as_string(record, relation) else {
        return;
    };
    let Some(target) = collections
        .get(target_collection)
        .and_then(|records| {
            records
                .iter()
                .find(|r| record_id(r) == Some(target_id.as_str()))
        })
        .cloned()
    else {
        return;
    };
    if let Value::Object(obj) = record {
        let mut expand = Map::new();
        expand.insert(relation.to_string(), target);
        obj.insert("expand".to_string(), Value::Object(expand));
    }
}

fn merge_fields(target: &mut Value, data: &Value) {
    if let (Value::Object(target), Value::Object(data)) = (target, data) {
        for (k, v) in data {
            target.insert(k.clone(), v.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::gateway::collections;
    use serde_json::json;

    fn seeded() -> MemoryStore {
        let store = MemoryStore::new();
        store.seed(
            collections::BALLOTS,
            vec![json!({"id": "b1", "event": "sag-2024", "user": "u1", "league": "l1"})],
        );
        store.seed(
            collections::PICKS,
            vec![
                json!({"id": "p1", "ballot": "b1", "category": "c1", "nominee": "n1"}),
                json!({"id": "p2", "ballot": "b1", "category": "c2", "nominee": "n2"}),
            ],
        );
        store
    }

    #[tokio::test]
    async fn test_query_eq_filter() {
        let store = seeded();
        let hits = store
            .query(collections::PICKS, RecordQuery::new().eq("category", "c1"))
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["id"], "p1");
    }

    #[tokio::test]
    async fn test_query_any_of_filter() {
        let store = seeded();
        let hits = store
            .query(
                collections::PICKS,
                RecordQuery::new().any_of("category", vec!["c1".to_string(), "c2".to_string()]),
            )
            .await
            .unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[tokio::test]
    async fn test_query_expand_ballot() {
        let store = seeded();
        let hits = store
            .query(collections::PICKS, RecordQuery::new().expand("ballot"))
            .await
            .unwrap();
        assert_eq!(hits[0]["expand"]["ballot"]["user"], "u1");
    }

    #[tokio::test]
    async fn test_transact_create_assigns_id() {
        let store = MemoryStore::new();
        store
            .transact(vec![WriteOp::Create {
                collection: collections::SCORES,
                data: json!({"user": "u1"}),
            }])
            .await
            .unwrap();
        let records = store.records(collections::SCORES);
        assert_eq!(records.len(), 1);
        assert!(records[0]["id"].as_str().unwrap().starts_with("rec"));
    }

    #[tokio::test]
    async fn test_transact_update_merges_fields() {
        let store = MemoryStore::new();
        store.seed(
            collections::SCORES,
            vec![json!({"id": "s1", "user": "u1", "total_points": 50})],
        );
        store
            .transact(vec![WriteOp::Update {
                collection: collections::SCORES,
                id: "s1".to_string(),
                data: json!({"total_points": 200}),
            }])
            .await
            .unwrap();
        let records = store.records(collections::SCORES);
        assert_eq!(records[0]["total_points"], 200);
        assert_eq!(records[0]["user"], "u1");
    }

    #[tokio::test]
    async fn test_transact_rejects_whole_batch_on_missing_target() {
        let store = MemoryStore::new();
        let result = store
            .transact(vec![
                WriteOp::Create {
                    collection: collections::SCORES,
                    data: json!({"user": "u1"}),
                },
                WriteOp::Update {
                    collection: collections::SCORES,
                    id: "missing".to_string(),
                    data: json!({"total_points": 1}),
                },
            ])
            .await;
        assert!(result.is_err());
        // Nothing from the batch landed.
        assert!(store.records(collections::SCORES).is_empty());
        assert_eq!(store.ops_applied(), 0);
    }
}
