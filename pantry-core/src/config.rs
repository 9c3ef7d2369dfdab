use anyhow::{Context, Result};

/// Application configuration from environment
#[derive(Debug, Clone)]
pub struct Config {
    pub openrouter_api_key: String,
}

impl Config {
    /// Load configuration from the .env file and environment
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Not an error if .env is missing

        let openrouter_api_key =
            std::env::var("OPENROUTER_API_KEY").context("OPENROUTER_API_KEY not set")?;

        Ok(Self { openrouter_api_key })
    }
}
