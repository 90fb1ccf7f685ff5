//! Value validation
//!
//! Acceptance rules dispatched on the option type tag, plus the per-key
//! and whole-object checks run by the façade before anything reaches the
//! store. All checks are side-effect free.

use serde_json::{Map, Value};

use crate::schema::Schema;
use configurator_types::prelude::*;

/// Check a candidate value against a resolved descriptor
pub fn accepts(descriptor: &OptionDescriptor, value: &Value) -> bool {
	accepts_rule(descriptor.typ, &descriptor.validation, value)
}

/// Type-dispatched acceptance rule
///
/// Normalization guarantees the tag/validation pairing; a pairing that
/// cannot occur in a descriptor accepts nothing.
pub(crate) fn accepts_rule(typ: OptionType, validation: &Validation, value: &Value) -> bool {
	match (typ, validation) {
		(OptionType::Any, Validation::Predicate(predicate)) => predicate(value),
		(OptionType::String, Validation::Predicate(predicate)) => {
			value.is_string() && predicate(value)
		}
		(OptionType::Bool, Validation::Predicate(predicate)) => {
			value.is_boolean() && predicate(value)
		}
		(OptionType::Choice, Validation::OneOf(allowed)) => allowed.contains(value),
		_ => false,
	}
}

/// Validate a single key/value pair against the schema
pub fn validate_set(schema: &Schema, name: &str, value: &Value) -> CfgResult<()> {
	let descriptor = schema
		.get(name)
		.ok_or_else(|| Error::Config(format!("Unrecognized configuration key: {}", name)))?;

	if !accepts(descriptor, value) {
		return Err(Error::Config(format!("Invalid value for key: {}", name)));
	}

	Ok(())
}

/// Validate a whole configuration object against the schema
///
/// Required keys are checked for presence first, then every key present
/// is validated individually (which also catches unrecognized keys).
/// Absent non-required keys are simply omitted; defaults are not
/// injected here.
pub fn validate_save(schema: &Schema, object: &Map<String, Value>) -> CfgResult<()> {
	for required in schema.required_keys() {
		if !object.contains_key(required) {
			return Err(Error::Config(format!("Missing required configuration \"{}\"", required)));
		}
	}

	for (name, value) in object {
		validate_set(schema, name, value)?;
	}

	Ok(())
}


// vim: ts=4
