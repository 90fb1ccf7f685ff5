pub use crate::config::{Config, ConfigBuilder};
pub use crate::schema::Schema;
pub use configurator_types::prelude::*;

// vim: ts=4
