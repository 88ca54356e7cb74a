//! REST client for the document store.
//!
//! Speaks the store's records API: `GET /api/collections/{name}/records`
//! with `filter`/`expand`/paging parameters, and `POST /api/batch` for the
//! atomic write batch. Connection settings come from the environment; a
//! missing variable is a fatal configuration error raised before any
//! network activity.

use crate::error::{PoolError, Result};
use crate::store::gateway::{Filter, Gateway, RecordQuery, WriteOp};
use crate::{STORE_TOKEN_ENV_VAR, STORE_URL_ENV_VAR};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

/// Per-request timeout; a slow store is treated like an unreachable one.
const STORE_TIMEOUT_SECS: u64 = 15;

/// Records per page on query calls (the store's maximum).
const PER_PAGE: usize = 500;

pub struct HttpStore {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpStore {
    /// Build a store client from `AWARDS_POOL_STORE_URL` and
    /// `AWARDS_POOL_STORE_TOKEN`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(STORE_URL_ENV_VAR).map_err(|_| PoolError::MissingConfig {
            env_var: STORE_URL_ENV_VAR.to_string(),
        })?;
        let token = std::env::var(STORE_TOKEN_ENV_VAR).map_err(|_| PoolError::MissingConfig {
            env_var: STORE_TOKEN_ENV_VAR.to_string(),
        })?;
        Self::new(base_url, token)
    }

    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(STORE_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut h = HeaderMap::new();
        h.insert(ACCEPT, HeaderValue::from_static("application/json"));
        h.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token))?,
        );
        Ok(h)
    }
}

#[async_trait]
impl Gateway for HttpStore {
    async fn query(&self, collection: &str, query: RecordQuery) -> Result<Vec<Value>> {
        let url = format!("{}/api/collections/{}/records", self.base_url, collection);
        let filter = encode_filter(&query.filters);

        let mut items = Vec::new();
        let mut page = 1usize;
        loop {
            let mut params: Vec<(&str, String)> = vec![
                ("page", page.to_string()),
                ("perPage", PER_PAGE.to_string()),
            ];
            if let Some(f) = &filter {
                params.push(("filter", f.clone()));
            }
            if let Some(e) = &query.expand {
                params.push(("expand", e.clone()));
            }

            let body: Value = self
                .client
                .get(&url)
                .headers(self.headers()?)
                .query(&params)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;

            let page_items = body
                .get("items")
                .and_then(Value::as_array)
                .cloned()
                .ok_or_else(|| PoolError::Store {
                    message: format!("query on '{collection}' returned no items array"),
                })?;
            items.extend(page_items);

            let total_pages = body
                .get("totalPages")
                .and_then(Value::as_u64)
                .unwrap_or(1) as usize;
            if page >= total_pages {
                break;
            }
            page += 1;
        }
        Ok(items)
    }

    async fn transact(&self, ops: Vec<WriteOp>) -> Result<()> {
        if ops.is_empty() {
            return Ok(());
        }
        let url = format!("{}/api/batch", self.base_url);
        let requests: Vec<Value> = ops.iter().map(op_to_request).collect();

        self.client
            .post(&url)
            .headers(self.headers()?)
            .json(&json!({ "requests": requests }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Encode filters as the store's filter expression: clauses joined with
/// `&&`, membership expanded to a parenthesized `||` chain.
fn encode_filter(filters: &[Filter]) -> Option<String> {
    if filters.is_empty() {
        return None;
    }
    let clauses: Vec<String> = filters
        .iter()
        .map(|f| match f {
            Filter::Eq { field, value } => format!("{field}='{}'", escape(value)),
            Filter::AnyOf { field, values } => {
                let alts: Vec<String> = values
                    .iter()
                    .map(|v| format!("{field}='{}'", escape(v)))
                    .collect();
                format!("({})", alts.join(" || "))
            }
        })
        .collect();
    Some(clauses.join(" && "))
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

fn op_to_request(op: &WriteOp) -> Value {
    match op {
        WriteOp::Create { collection, data } => json!({
            "method": "POST",
            "url": format!("/api/collections/{collection}/records"),
            "body": data,
        }),
        WriteOp::Update { collection, id, data } => json!({
            "method": "PATCH",
            "url": format!("/api/collections/{collection}/records/{id}"),
            "body": data,
        }),
    }
}
