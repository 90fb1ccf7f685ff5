use std::fmt;

pub type CfgResult<T> = std::result::Result<T, Error>;

/// Error type shared by the engine and the store adapters
#[derive(Debug)]
pub enum Error {
	/// An option declaration is structurally invalid. Raised only while
	/// building a schema; fatal to config-instance construction.
	Schema(String),
	/// A value failed validation, a required key is missing, an
	/// unrecognized key was supplied, or the instance name is invalid.
	/// Raised before any store call is made.
	Config(String),
	/// Store-layer failure reported by an adapter.
	Db,

	// externals
	Json(String),
	Io(std::io::Error),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Error::Schema(msg) => write!(f, "schema error: {}", msg),
			Error::Config(msg) => write!(f, "config error: {}", msg),
			Error::Db => write!(f, "database error"),
			Error::Json(msg) => write!(f, "json error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Error::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Error::Json(err.to_string())
	}
}

// vim: ts=4
