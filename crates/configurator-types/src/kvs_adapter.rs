//! Key-Value Store Adapter
//!
//! Trait for pluggable namespaced key-value backends used to persist
//! configuration data. The engine is the only consumer; it performs all
//! validation before a value reaches an adapter, so adapters store
//! whatever JSON they are handed.
//!
//! Each adapter implementation provides its own constructor handling
//! backend-specific initialization (database path, pool settings, etc.).

use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

use crate::error::CfgResult;

#[async_trait]
pub trait KvsAdapter: Debug + Send + Sync {
	/// Read the value stored under `(namespace, key)`.
	///
	/// A missing key is `Ok(None)`, not an error.
	async fn get(&self, namespace: &str, key: &str) -> CfgResult<Option<Value>>;

	/// Store `value` under `(namespace, key)`, replacing any previous value.
	async fn set(&self, namespace: &str, key: &str, value: Value) -> CfgResult<()>;
}

// vim: ts=4
