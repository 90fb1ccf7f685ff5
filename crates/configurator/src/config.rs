//! Config instance façade
//!
//! Binds a normalized [`Schema`] to a named configuration instance and a
//! store handle. The four operations here are the only points of
//! interaction with the store; each validates first (where validation
//! applies) and delegates a single request/response call. No retries, no
//! caching, no locking — the schema is immutable and everything
//! persistent lives in the store.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::{Arc, LazyLock};

use crate::schema::Schema;
use crate::validate;
use configurator_types::prelude::*;

/// Fixed outer store namespace reserved for configuration data
pub const CONFIG_NAMESPACE: &str = "__config";

#[allow(clippy::unwrap_used)] // literal pattern, cannot fail
static NAME_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[A-Za-z_-]+$").unwrap());

/// Check a config instance name: letters, `_` and `-` only, non-empty
fn validate_name(name: &str) -> CfgResult<()> {
	if !NAME_RE.is_match(name) {
		return Err(Error::Config(format!(
			"Invalid configuration name: {}. The name must only contain letters, _ and -",
			name
		)));
	}
	Ok(())
}

/// A named configuration instance
///
/// Holds no mutable state; all persisted state lives in the external
/// store, namespaced by the instance name. Cheap to share via `Arc`.
#[derive(Debug)]
pub struct Config {
	name: Box<str>,
	schema: Schema,
	kvs: Arc<dyn KvsAdapter>,
}

impl Config {
	/// Create a builder for constructing a config instance
	pub fn builder() -> ConfigBuilder {
		ConfigBuilder::new()
	}

	/// Create a config instance directly from a declaration mapping.
	///
	/// Fails synchronously, before any store interaction, if the name
	/// fails the character check or any declaration fails normalization.
	pub fn new<N>(
		kvs: Arc<dyn KvsAdapter>,
		name: &str,
		declarations: impl IntoIterator<Item = (N, OptionDeclaration)>,
	) -> CfgResult<Config>
	where
		N: Into<Box<str>>,
	{
		validate_name(name)?;
		let schema = Schema::normalize(declarations)?;
		info!("Created config instance '{}' with {} options", name, schema.len());
		Ok(Config { name: name.into(), schema, kvs })
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn schema(&self) -> &Schema {
		&self.schema
	}

	/// Validate and store a whole configuration object under the
	/// instance name. Nothing is written if validation fails.
	pub async fn save_all(&self, object: Map<String, Value>) -> CfgResult<()> {
		validate::validate_save(&self.schema, &object)?;
		self.kvs.set(CONFIG_NAMESPACE, &self.name, Value::Object(object)).await?;
		info!("Saved configuration '{}'", self.name);
		Ok(())
	}

	/// Load the whole configuration object stored under the instance
	/// name. Data read back is trusted; no validation is applied.
	pub async fn load_all(&self) -> CfgResult<Option<Value>> {
		// TODO: overlay values from environment variables (declarations
		// carry a reserved `env` field for this)
		self.kvs.get(CONFIG_NAMESPACE, &self.name).await
	}

	/// Read a single value. No existence or type check is applied.
	pub async fn get(&self, key: &str) -> CfgResult<Option<Value>> {
		// TODO: overlay values from environment variables
		self.kvs.get(CONFIG_NAMESPACE, &self.item_key(key)).await
	}

	/// Validate and store a single value. Nothing is written if
	/// validation fails.
	pub async fn set(&self, key: &str, value: Value) -> CfgResult<()> {
		validate::validate_set(&self.schema, key, &value)?;
		self.kvs.set(CONFIG_NAMESPACE, &self.item_key(key), value).await?;
		debug!("Set configuration '{}' key '{}'", self.name, key);
		Ok(())
	}

	/// Store key for a single option: `<instanceName>.<optionName>`
	fn item_key(&self, key: &str) -> String {
		format!("{}.{}", self.name, key)
	}
}

/// Builder for [`Config`] with fluent API
#[derive(Default)]
pub struct ConfigBuilder {
	name: Option<Box<str>>,
	kvs: Option<Arc<dyn KvsAdapter>>,
	declarations: Vec<(Box<str>, OptionDeclaration)>,
}

impl ConfigBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the instance name (required)
	pub fn name(mut self, name: impl Into<Box<str>>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Set the store handle (required)
	pub fn kvs(mut self, kvs: Arc<dyn KvsAdapter>) -> Self {
		self.kvs = Some(kvs);
		self
	}

	/// Declare one option. A later declaration under the same name
	/// overwrites an earlier one.
	pub fn option(mut self, name: impl Into<Box<str>>, declaration: OptionDeclaration) -> Self {
		self.declarations.push((name.into(), declaration));
		self
	}

	/// Build the config instance
	pub fn build(self) -> CfgResult<Config> {
		let name = self
			.name
			.ok_or_else(|| Error::Config("Configuration name is required".into()))?;
		let kvs = self
			.kvs
			.ok_or_else(|| Error::Config("Configuration store handle is required".into()))?;

		Config::new(kvs, &name, self.declarations)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use configurator_kvs_adapter_memory::KvsAdapterMemory;
	use serde_json::json;

	fn memory_kvs() -> Arc<KvsAdapterMemory> {
		Arc::new(KvsAdapterMemory::new())
	}

	fn test_config(kvs: Arc<KvsAdapterMemory>) -> Config {
		Config::builder()
			.name("app")
			.kvs(kvs)
			.option("port", OptionDeclaration::builder("any").required(true).build())
			.option(
				"mode",
				OptionDeclaration::builder("choice")
					.default(json!("a"))
					.one_of([json!("a"), json!("b")])
					.build(),
			)
			.option("flag", OptionDeclaration::builder("bool").build())
			.build()
			.unwrap()
	}

	#[test]
	fn test_validate_name() {
		assert!(validate_name("app").is_ok());
		assert!(validate_name("my-app").is_ok());
		assert!(validate_name("my_app").is_ok());
		assert!(validate_name("MyApp").is_ok());
		assert!(validate_name("_-_").is_ok());

		assert!(validate_name("").is_err());
		assert!(validate_name("123").is_err());
		assert!(validate_name("my app").is_err());
		assert!(validate_name("app1").is_err());
		assert!(validate_name("app.name").is_err());
	}

	#[test]
	fn test_builder_requires_name_and_kvs() {
		assert!(matches!(Config::builder().build(), Err(Error::Config(_))));
		assert!(matches!(Config::builder().name("app").build(), Err(Error::Config(_))));
	}

	#[test]
	fn test_invalid_name_fails_construction() {
		let res = Config::builder().name("bad name").kvs(memory_kvs()).build();
		assert!(matches!(res, Err(Error::Config(_))));
	}

	#[test]
	fn test_invalid_declaration_fails_construction() {
		let res = Config::builder()
			.name("app")
			.kvs(memory_kvs())
			.option("port", OptionDeclaration::builder("number").build())
			.build();
		assert!(matches!(res, Err(Error::Schema(_))));
	}

	#[tokio::test]
	async fn test_save_all_requires_required_keys() {
		let config = test_config(memory_kvs());

		let res = config.save_all(Map::new()).await;
		assert!(matches!(res, Err(Error::Config(msg)) if msg.contains("port")));

		let Value::Object(object) = json!({"port": 8080}) else { unreachable!() };
		assert!(config.save_all(object).await.is_ok());
	}

	#[tokio::test]
	async fn test_save_all_round_trip() {
		let kvs = memory_kvs();
		let config = test_config(kvs.clone());

		let Value::Object(object) = json!({"port": 8080, "mode": "b"}) else { unreachable!() };
		config.save_all(object).await.unwrap();

		// whole-object key is the bare instance name
		let stored = kvs.get(CONFIG_NAMESPACE, "app").await.unwrap();
		assert_eq!(stored, Some(json!({"port": 8080, "mode": "b"})));
		assert_eq!(config.load_all().await.unwrap(), Some(json!({"port": 8080, "mode": "b"})));
	}

	#[tokio::test]
	async fn test_set_and_get_single_key() {
		let kvs = memory_kvs();
		let config = test_config(kvs.clone());

		config.set("mode", json!("a")).await.unwrap();

		// per-key composition is <instanceName>.<optionName>
		let stored = kvs.get(CONFIG_NAMESPACE, "app.mode").await.unwrap();
		assert_eq!(stored, Some(json!("a")));
		assert_eq!(config.get("mode").await.unwrap(), Some(json!("a")));
	}

	#[tokio::test]
	async fn test_set_validates_choice() {
		let config = test_config(memory_kvs());

		assert!(config.set("mode", json!("a")).await.is_ok());
		assert!(matches!(config.set("mode", json!("c")).await, Err(Error::Config(_))));
		assert!(matches!(config.set("unknown_key", json!(1)).await, Err(Error::Config(_))));
	}

	#[tokio::test]
	async fn test_set_validates_bool_strictly() {
		let config = test_config(memory_kvs());

		assert!(matches!(config.set("flag", json!(1)).await, Err(Error::Config(_))));
		assert!(config.set("flag", json!(true)).await.is_ok());
	}

	#[tokio::test]
	async fn test_failed_set_writes_nothing() {
		let kvs = memory_kvs();
		let config = test_config(kvs.clone());

		let _ = config.set("mode", json!("c")).await;
		assert_eq!(kvs.get(CONFIG_NAMESPACE, "app.mode").await.unwrap(), None);
	}

	#[tokio::test]
	async fn test_failed_save_all_writes_nothing() {
		let kvs = memory_kvs();
		let config = test_config(kvs.clone());

		let Value::Object(object) = json!({"port": 1, "flag": "yes"}) else { unreachable!() };
		let _ = config.save_all(object).await;
		assert_eq!(kvs.get(CONFIG_NAMESPACE, "app").await.unwrap(), None);
	}

	#[tokio::test]
	async fn test_load_all_of_unsaved_config() {
		let config = test_config(memory_kvs());
		assert_eq!(config.load_all().await.unwrap(), None);
	}
}

// vim: ts=4
