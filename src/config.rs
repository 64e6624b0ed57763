use std::env;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically via dotenvy. Nothing is required;
/// every setting has a default, since the crate runs fully offline.
pub struct Config {
    /// Path to the SQLite file backing the profile slot.
    pub db_path: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            db_path: env::var("ALGOMBTI_DB_PATH")
                .unwrap_or_else(|_| "./algombti.db".to_string()),
        })
    }
}
