pub use crate::error::{CfgResult, Error};
pub use crate::kvs_adapter::KvsAdapter;
pub use crate::types::{
	OptionDeclaration, OptionDeclarationBuilder, OptionDescriptor, OptionType, Validation,
	ValuePredicate,
};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
