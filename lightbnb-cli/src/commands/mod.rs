//! Command implementations for the lightbnb CLI

pub mod properties;
pub mod reservations;
pub mod users;

use anyhow::{Context, Result};
use lightbnb_db::{create_pool_with_options, PgPool};

use crate::config::LightbnbConfig;

// Re-export main dispatcher functions for flat access from main.rs
pub use properties::run_properties;
pub use reservations::run_reservations;
pub use users::run_users;

/// Settings every database-backed command needs
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: LightbnbConfig,
    pub database_url: Option<String>,
}

impl CommandContext {
    /// Open a pool only when a command actually talks to the database.
    pub async fn connect(&self) -> Result<PgPool> {
        let url = self.config.database_url(self.database_url.clone())?;
        create_pool_with_options(&url, self.config.database.max_connections)
            .await
            .context("Failed to create database pool")
    }
}
