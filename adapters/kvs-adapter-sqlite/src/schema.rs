//! Database schema initialization
//!
//! Creates the config_values table if it does not exist yet.

use sqlx::SqlitePool;

/// Initialize the database schema
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS config_values (
			namespace text NOT NULL,
			name text NOT NULL,
			value text,
			PRIMARY KEY(namespace, name)
	)",
	)
	.execute(db)
	.await?;

	Ok(())
}

// vim: ts=4
