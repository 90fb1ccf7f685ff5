//! SQLite adapter contract tests
//!
//! Exercises the KvsAdapter contract against a real database file.

use configurator::kvs_adapter::KvsAdapter;
use configurator_kvs_adapter_sqlite::KvsAdapterSqlite;
use serde_json::json;
use tempfile::TempDir;

async fn create_test_adapter() -> (KvsAdapterSqlite, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");

	let adapter = KvsAdapterSqlite::open(temp_dir.path().join("config.db"))
		.await
		.expect("Failed to create adapter");

	(adapter, temp_dir)
}

#[tokio::test]
async fn test_set_then_get() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter.set("__config", "app", json!({"port": 8080})).await.expect("Failed to set");

	let value = adapter.get("__config", "app").await.expect("Failed to get");
	assert_eq!(value, Some(json!({"port": 8080})));
}

#[tokio::test]
async fn test_get_missing_is_none() {
	let (adapter, _temp) = create_test_adapter().await;

	let value = adapter.get("__config", "missing").await.expect("Failed to get");
	assert_eq!(value, None);
}

#[tokio::test]
async fn test_set_replaces_existing_value() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter.set("__config", "app.mode", json!("a")).await.expect("Failed to set");
	adapter.set("__config", "app.mode", json!("b")).await.expect("Failed to set");

	let value = adapter.get("__config", "app.mode").await.expect("Failed to get");
	assert_eq!(value, Some(json!("b")));
}

#[tokio::test]
async fn test_namespaces_are_isolated() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter.set("__config", "key", json!(1)).await.expect("Failed to set");
	adapter.set("other", "key", json!(2)).await.expect("Failed to set");

	assert_eq!(adapter.get("__config", "key").await.expect("Failed to get"), Some(json!(1)));
	assert_eq!(adapter.get("other", "key").await.expect("Failed to get"), Some(json!(2)));
}

#[tokio::test]
async fn test_values_survive_reopen() {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let path = temp_dir.path().join("config.db");

	{
		let adapter = KvsAdapterSqlite::open(&path).await.expect("Failed to create adapter");
		adapter.set("__config", "app", json!({"flag": true})).await.expect("Failed to set");
	}

	let adapter = KvsAdapterSqlite::open(&path).await.expect("Failed to reopen adapter");
	let value = adapter.get("__config", "app").await.expect("Failed to get");
	assert_eq!(value, Some(json!({"flag": true})));
}

#[tokio::test]
async fn test_stores_json_shapes() {
	let (adapter, _temp) = create_test_adapter().await;

	for (key, value) in [
		("null", json!(null)),
		("bool", json!(true)),
		("number", json!(42)),
		("string", json!("hello")),
		("array", json!([1, 2, 3])),
	] {
		adapter.set("__config", key, value.clone()).await.expect("Failed to set");
		assert_eq!(adapter.get("__config", key).await.expect("Failed to get"), Some(value));
	}
}

// vim: ts=4
