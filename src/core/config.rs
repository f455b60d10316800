use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub notion_token: String,
    pub notion_db_id: String,
}

impl AppConfig {
    /// Load the configuration from the environment.
    ///
    /// Both variables are required; a missing one is a fatal startup error
    /// and is reported with the variable name.
    ///
    /// # Errors
    ///
    /// Returns an error naming the missing environment variable.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            notion_token: env::var("NOTION_TOKEN").map_err(|e| format!("NOTION_TOKEN: {}", e))?,
            notion_db_id: env::var("NOTION_DB_ID").map_err(|e| format!("NOTION_DB_ID: {}", e))?,
        })
    }
}
