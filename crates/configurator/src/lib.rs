//! Configurator is a typed configuration schema engine.
//!
//! It validates declared option schemas at registration time, validates
//! values at write time, and mediates reads/writes against a namespaced
//! external key-value store.
//!
//! # Overview
//!
//! - [`Schema::normalize`] turns a map of loose [`OptionDeclaration`]s
//!   into a frozen map of strict [`OptionDescriptor`]s, rejecting
//!   malformed declarations immediately.
//! - The `validate` module decides whether a candidate value is
//!   acceptable for a descriptor, per key and for whole objects.
//! - [`Config`] binds a normalized schema to a named instance and a
//!   store handle, exposing `save_all` / `load_all` / `get` / `set`.
//!
//! All schema-authoring mistakes surface at construction time, so the
//! read/write paths trust descriptors unconditionally. Store failures
//! propagate unchanged; this layer never retries or caches.

#![forbid(unsafe_code)]

pub mod config;
pub mod prelude;
pub mod schema;
pub mod validate;

pub use config::{Config, ConfigBuilder, CONFIG_NAMESPACE};
pub use configurator_types::{
	CfgResult, Error, KvsAdapter, OptionDeclaration, OptionDeclarationBuilder, OptionDescriptor,
	OptionType, Validation,
};
pub use schema::Schema;

// vim: ts=4
