//! Seed data loading for the in-memory store.

use deyal_core::{DeyalError, DeyalResult};
use deyal_domain::User;
use std::path::Path;
use tracing::info;

/// Parses a JSON array of users.
pub fn parse_seed_users(json: &str) -> DeyalResult<Vec<User>> {
    serde_json::from_str(json)
        .map_err(|e| DeyalError::Configuration(format!("Invalid user seed data: {e}")))
}

/// Reads a JSON array of users from `path`.
pub async fn load_seed_users(path: impl AsRef<Path>) -> DeyalResult<Vec<User>> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        DeyalError::Configuration(format!("Cannot read user seed file {}: {e}", path.display()))
    })?;

    let users = parse_seed_users(&raw)?;
    info!("Loaded {} seed users from {}", users.len(), path.display());
    Ok(users)
}
