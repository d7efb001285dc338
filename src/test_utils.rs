//! Shared test utilities for `ExchangeBuddy`.
//!
//! This module provides common helper functions for seeding temporary
//! ledger files and opening stores over them with sensible defaults.

use crate::errors::Result;
use crate::store::ExchangeStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes a fresh, empty ledger document at the given rate into a temp
/// directory and returns the directory guard plus the file path.
///
/// The guard must stay alive for the duration of the test; dropping it
/// deletes the file.
pub fn seed_ledger_file(rate: f64) -> Result<(TempDir, PathBuf)> {
    seed_ledger_json(&format!(
        r#"{{
            "rate": {rate},
            "logChannelId": null,
            "users": {{}},
            "totals": {{ "stablecoinTotal": 0.0, "fiatTotal": 0.0 }}
        }}"#
    ))
}

/// Writes arbitrary ledger JSON into a temp directory.
///
/// Use this for malformed-document and unusual-shape tests.
pub fn seed_ledger_json(json: &str) -> Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.json");
    std::fs::write(&path, json)?;
    Ok((dir, path))
}

/// Opens a store over a freshly seeded empty ledger at the given rate.
/// Returns (dir guard, store) for common test scenarios.
pub async fn setup_store(rate: f64) -> Result<(TempDir, ExchangeStore)> {
    let (dir, path) = seed_ledger_file(rate)?;
    let store = ExchangeStore::open(&path).await?;
    Ok((dir, store))
}
