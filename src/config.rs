//! Runtime settings loaded from the environment.
//!
//! Secrets and identifiers come from the process environment (optionally a
//! `.env` file loaded in `main`); the ledger document itself lives at
//! `LEDGER_PATH` and is managed by the store, not here.

use crate::errors::{Error, Result};

/// Ledger location when `LEDGER_PATH` is unset.
const DEFAULT_LEDGER_PATH: &str = "config.json";

/// Liveness port when `HEALTH_PORT` is unset.
const DEFAULT_HEALTH_PORT: u16 = 3000;

/// Process-wide settings resolved once at startup.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Discord bot token
    pub token: String,
    /// The single guild commands are registered in
    pub guild_id: u64,
    /// Path of the JSON ledger document
    pub ledger_path: String,
    /// Port the liveness route binds to
    pub health_port: u16,
}

impl Settings {
    /// Reads settings from the environment.
    ///
    /// `DISCORD_BOT_TOKEN` and `GUILD_ID` are required; a missing or
    /// unparseable value is fatal at startup.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("DISCORD_BOT_TOKEN").map_err(|_| Error::Config {
            message: "DISCORD_BOT_TOKEN is not set".to_string(),
        })?;

        let raw_guild_id = std::env::var("GUILD_ID").map_err(|_| Error::Config {
            message: "GUILD_ID is not set".to_string(),
        })?;
        let guild_id = parse_guild_id(&raw_guild_id)?;

        let ledger_path =
            std::env::var("LEDGER_PATH").unwrap_or_else(|_| DEFAULT_LEDGER_PATH.to_string());
        let health_port = parse_port(std::env::var("HEALTH_PORT").ok())?;

        Ok(Self {
            token,
            guild_id,
            ledger_path,
            health_port,
        })
    }
}

/// Parses the guild snowflake out of `GUILD_ID`.
fn parse_guild_id(raw: &str) -> Result<u64> {
    raw.parse().map_err(|_| Error::Config {
        message: format!("GUILD_ID is not a valid guild id: {raw}"),
    })
}

/// Parses an optional `HEALTH_PORT` override, defaulting when unset.
fn parse_port(value: Option<String>) -> Result<u16> {
    match value {
        None => Ok(DEFAULT_HEALTH_PORT),
        Some(raw) => raw.parse().map_err(|_| Error::Config {
            message: format!("HEALTH_PORT is not a valid port: {raw}"),
        }),
    }
}
