//! Schema normalization
//!
//! Turns a name-keyed mapping of loose option declarations into a frozen
//! [`Schema`] of resolved descriptors. Normalization is the only way to
//! obtain descriptors, and it front-loads every schema-authoring mistake
//! (bad type tag, wrong validation kind, invalid or missing default) to
//! construction time. The read/write paths never re-check a descriptor.

use std::collections::HashMap;

use crate::validate;
use configurator_types::prelude::*;

/// Immutable mapping of option name to resolved descriptor
///
/// Built once per config instance; never mutated afterwards.
#[derive(Debug)]
pub struct Schema {
	options: HashMap<Box<str>, OptionDescriptor>,
}

impl Schema {
	/// Normalize a set of option declarations into a schema.
	///
	/// Declarations are processed independently; there are no
	/// cross-option dependencies and the outcome does not depend on
	/// iteration order. A later declaration under a name already seen
	/// overwrites the earlier one.
	pub fn normalize<N>(declarations: impl IntoIterator<Item = (N, OptionDeclaration)>) -> CfgResult<Schema>
	where
		N: Into<Box<str>>,
	{
		let mut options = HashMap::new();
		for (name, declaration) in declarations {
			let name = name.into();
			let descriptor = normalize_option(&name, declaration)?;
			debug!("Normalized config option: {} ({})", name, descriptor.typ);
			options.insert(name, descriptor);
		}
		Ok(Schema { options })
	}

	/// Get the descriptor for an option name
	pub fn get(&self, name: &str) -> Option<&OptionDescriptor> {
		self.options.get(name)
	}

	/// Iterate over all `(name, descriptor)` pairs
	pub fn list(&self) -> impl Iterator<Item = (&str, &OptionDescriptor)> {
		self.options.iter().map(|(name, descriptor)| (name.as_ref(), descriptor))
	}

	/// Names of all options marked required
	pub fn required_keys(&self) -> impl Iterator<Item = &str> {
		self.options
			.iter()
			.filter(|(_, descriptor)| descriptor.required)
			.map(|(name, _)| name.as_ref())
	}

	pub fn len(&self) -> usize {
		self.options.len()
	}

	pub fn is_empty(&self) -> bool {
		self.options.is_empty()
	}
}

/// Resolve one declaration into a descriptor
fn normalize_option(name: &str, declaration: OptionDeclaration) -> CfgResult<OptionDescriptor> {
	let typ = declaration
		.typ
		.as_deref()
		.and_then(OptionType::parse)
		.ok_or_else(|| {
			Error::Schema(format!(
				"Invalid type ({}) for config key ({})",
				declaration.typ.as_deref().unwrap_or(""),
				name
			))
		})?;

	// A choice validation is the allowed-value set itself; every other
	// type takes a predicate. A mismatched kind is a schema error rather
	// than a descriptor that silently rejects everything.
	let validation = match (typ, declaration.validation) {
		(OptionType::Choice, Some(validation @ Validation::OneOf(_))) => validation,
		(OptionType::Choice, None) => Validation::OneOf(Vec::new()),
		(_, Some(validation @ Validation::Predicate(_))) if typ != OptionType::Choice => validation,
		(_, None) => Validation::always(),
		(_, Some(_)) => {
			return Err(Error::Schema(format!("Invalid validation for config key ({})", name)));
		}
	};

	let default = match declaration.default {
		Some(value) => {
			if !validate::accepts_rule(typ, &validation, &value) {
				return Err(Error::Schema(format!("Invalid default value ({}) for ({})", value, name)));
			}
			value
		}
		None => typ.implicit_default().ok_or_else(|| {
			Error::Schema(format!("Default value is mandatory for type {} ({})", typ, name))
		})?,
	};

	Ok(OptionDescriptor {
		typ,
		required: declaration.required.unwrap_or(false),
		env: declaration.env,
		default,
		validation,
	})
}


// vim: ts=4
