//! Option declaration and descriptor types
//!
//! An [`OptionDeclaration`] is the caller-authored, loosely-validated
//! description of one configuration key. The engine's normalization step
//! is the only conversion point into the strict [`OptionDescriptor`]
//! representation; descriptors cannot be built any other way than through
//! a successful normalization.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Debug;
use std::sync::Arc;

/// Type alias for value validator predicates
pub type ValuePredicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Closed set of option type tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
	/// No shape constraint, any JSON value
	Any,
	/// JSON string
	String,
	/// One of an enumerated set of allowed values
	Choice,
	/// JSON `true` or `false`, nothing else
	Bool,
}

impl OptionType {
	/// Parse a raw declaration tag. Returns `None` for unrecognized tags.
	pub fn parse(tag: &str) -> Option<OptionType> {
		match tag {
			"any" => Some(OptionType::Any),
			"string" => Some(OptionType::String),
			"choice" => Some(OptionType::Choice),
			"bool" => Some(OptionType::Bool),
			_ => None,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			OptionType::Any => "any",
			OptionType::String => "string",
			OptionType::Choice => "choice",
			OptionType::Bool => "bool",
		}
	}

	/// Implicit default used when a declaration supplies none.
	/// `choice` has no implicit default; omitting one is a schema error.
	pub fn implicit_default(&self) -> Option<Value> {
		match self {
			OptionType::Any => Some(Value::Null),
			OptionType::String => Some(Value::String(String::new())),
			OptionType::Bool => Some(Value::Bool(false)),
			OptionType::Choice => None,
		}
	}
}

impl std::fmt::Display for OptionType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// Declared validation for an option
///
/// For `choice` options the validation IS the enumerated allowed-value
/// set; for every other type it is a predicate over the candidate value.
#[derive(Clone)]
pub enum Validation {
	Predicate(ValuePredicate),
	OneOf(Vec<Value>),
}

impl Validation {
	/// Wrap a predicate function
	pub fn predicate<F>(f: F) -> Self
	where
		F: Fn(&Value) -> bool + Send + Sync + 'static,
	{
		Validation::Predicate(Arc::new(f))
	}

	/// Enumerated allowed-value set for `choice` options
	pub fn one_of(values: impl IntoIterator<Item = Value>) -> Self {
		Validation::OneOf(values.into_iter().collect())
	}

	/// The always-true predicate, substituted when a declaration
	/// supplies no validation
	pub fn always() -> Self {
		Validation::Predicate(Arc::new(|_| true))
	}
}

impl Debug for Validation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Validation::Predicate(_) => f.write_str("Predicate(..)"),
			Validation::OneOf(values) => f.debug_tuple("OneOf").field(values).finish(),
		}
	}
}

/// Caller-authored declaration of one configuration option
///
/// Every field is optional; the normalization step decides what is
/// acceptable and fills in the rest.
#[derive(Clone, Debug, Default)]
pub struct OptionDeclaration {
	/// Raw type tag (`"any"`, `"string"`, `"choice"`, `"bool"`)
	pub typ: Option<Box<str>>,
	/// Whether the key must be present in a whole-object save
	pub required: Option<bool>,
	/// Environment variable name (reserved for the env overlay, unused)
	pub env: Option<Box<str>>,
	/// Declared default value
	pub default: Option<Value>,
	/// Declared validation
	pub validation: Option<Validation>,
}

impl OptionDeclaration {
	/// Create a builder with the given type tag
	pub fn builder(typ: impl Into<Box<str>>) -> OptionDeclarationBuilder {
		OptionDeclarationBuilder::new().typ(typ)
	}
}

/// Builder for [`OptionDeclaration`] with fluent API
#[derive(Default)]
pub struct OptionDeclarationBuilder {
	declaration: OptionDeclaration,
}

impl OptionDeclarationBuilder {
	pub fn new() -> Self {
		<Self as Default>::default()
	}

	/// Set the raw type tag
	pub fn typ(mut self, typ: impl Into<Box<str>>) -> Self {
		self.declaration.typ = Some(typ.into());
		self
	}

	/// Mark the option as required in whole-object saves
	pub fn required(mut self, required: bool) -> Self {
		self.declaration.required = Some(required);
		self
	}

	/// Set the environment variable name (reserved, unused)
	pub fn env(mut self, env: impl Into<Box<str>>) -> Self {
		self.declaration.env = Some(env.into());
		self
	}

	/// Set the default value
	pub fn default(mut self, value: Value) -> Self {
		self.declaration.default = Some(value);
		self
	}

	/// Set the declared validation
	pub fn validation(mut self, validation: Validation) -> Self {
		self.declaration.validation = Some(validation);
		self
	}

	/// Set a predicate validation function
	pub fn validator<F>(self, f: F) -> Self
	where
		F: Fn(&Value) -> bool + Send + Sync + 'static,
	{
		self.validation(Validation::predicate(f))
	}

	/// Set the allowed-value set for a `choice` option
	pub fn one_of(self, values: impl IntoIterator<Item = Value>) -> Self {
		self.validation(Validation::one_of(values))
	}

	/// Build the declaration. No validation happens here; the engine's
	/// normalization is the single point of rejection.
	pub fn build(self) -> OptionDeclaration {
		self.declaration
	}
}

/// Normalized, fully-validated representation of one option
///
/// Invariants, guaranteed by normalization: `default` is always present
/// and accepted by the type rule; `validation` is `OneOf` exactly when
/// `typ` is `Choice` and a callable predicate otherwise.
#[derive(Clone)]
pub struct OptionDescriptor {
	pub typ: OptionType,
	pub required: bool,
	/// Reserved for the environment-variable overlay; carried, never read
	pub env: Option<Box<str>>,
	pub default: Value,
	pub validation: Validation,
}

impl Debug for OptionDescriptor {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("OptionDescriptor")
			.field("typ", &self.typ)
			.field("required", &self.required)
			.field("env", &self.env)
			.field("default", &self.default)
			.field("validation", &self.validation)
			.finish()
	}
}


// vim: ts=4
