//! In-memory key-value store adapter
//!
//! Reference [`KvsAdapter`] implementation backed by a lock-protected
//! map. Useful as a test double and for embedding where persistence is
//! not needed. Values live for the lifetime of the adapter; nothing is
//! written to disk.

#![forbid(unsafe_code)]

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;

use configurator::prelude::*;

/// In-memory namespaced key-value store
#[derive(Debug, Default)]
pub struct KvsAdapterMemory {
	namespaces: RwLock<HashMap<Box<str>, HashMap<Box<str>, Value>>>,
}

impl KvsAdapterMemory {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of values stored in a namespace
	pub fn len(&self, namespace: &str) -> usize {
		self.namespaces.read().get(namespace).map_or(0, HashMap::len)
	}

	pub fn is_empty(&self, namespace: &str) -> bool {
		self.len(namespace) == 0
	}
}

#[async_trait]
impl KvsAdapter for KvsAdapterMemory {
	async fn get(&self, namespace: &str, key: &str) -> CfgResult<Option<Value>> {
		let namespaces = self.namespaces.read();
		Ok(namespaces.get(namespace).and_then(|values| values.get(key)).cloned())
	}

	async fn set(&self, namespace: &str, key: &str, value: Value) -> CfgResult<()> {
		let mut namespaces = self.namespaces.write();
		namespaces.entry(namespace.into()).or_default().insert(key.into(), value);
		Ok(())
	}
}


// vim: ts=4
