//! Shared types for the configurator typed configuration engine.
//!
//! This crate contains the foundational types shared between the engine
//! crate and all store adapter implementations: the option declaration
//! and descriptor types, the `KvsAdapter` store trait, and the error
//! type. Extracting these into a separate crate allows adapter crates to
//! compile in parallel with the engine.

#![forbid(unsafe_code)]

pub mod error;
pub mod kvs_adapter;
pub mod prelude;
pub mod types;

pub use error::{CfgResult, Error};
pub use kvs_adapter::KvsAdapter;
pub use types::{
	OptionDeclaration, OptionDeclarationBuilder, OptionDescriptor, OptionType, Validation,
	ValuePredicate,
};

// vim: ts=4
