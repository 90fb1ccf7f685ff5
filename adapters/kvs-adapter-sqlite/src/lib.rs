//! SQLite-backed key-value store adapter
//!
//! Persists configuration values as JSON text rows keyed by
//! `(namespace, name)`. The table is created on adapter construction;
//! there are no migrations beyond that.

#![forbid(unsafe_code)]

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{
	sqlite::{self, SqlitePool},
	Row,
};
use std::path::Path;

use configurator::prelude::*;

mod schema;

/// SQLite-backed namespaced key-value store
#[derive(Debug)]
pub struct KvsAdapterSqlite {
	db: SqlitePool,
}

impl KvsAdapterSqlite {
	/// Create an adapter over an existing pool, initializing the schema
	pub async fn new(db: SqlitePool) -> CfgResult<Self> {
		schema::init_db(&db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::Db)?;
		Ok(Self { db })
	}

	/// Open (or create) a database file and initialize the schema
	pub async fn open(path: impl AsRef<Path>) -> CfgResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::Db)?;

		Self::new(db).await
	}
}

#[async_trait]
impl KvsAdapter for KvsAdapterSqlite {
	async fn get(&self, namespace: &str, key: &str) -> CfgResult<Option<Value>> {
		let row = sqlx::query("SELECT value FROM config_values WHERE namespace = ? AND name = ?")
			.bind(namespace)
			.bind(key)
			.fetch_optional(&self.db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::Db)?;

		Ok(row.and_then(|r| {
			let value: Option<String> = r.get("value");
			value.and_then(|v| serde_json::from_str(&v).ok())
		}))
	}

	async fn set(&self, namespace: &str, key: &str, value: Value) -> CfgResult<()> {
		sqlx::query("INSERT OR REPLACE INTO config_values (namespace, name, value) VALUES (?, ?, ?)")
			.bind(namespace)
			.bind(key)
			.bind(value.to_string())
			.execute(&self.db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::Db)?;

		Ok(())
	}
}

// vim: ts=4
