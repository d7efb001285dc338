//! Unified error types and result handling.

use thiserror::Error;

/// All failure kinds the bot distinguishes.
#[derive(Debug, Error)]
pub enum Error {
    /// Startup configuration failures: missing environment variables, a
    /// missing or malformed ledger file. Always fatal before serving.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong, including the offending path or variable
        message: String,
    },

    /// Ledger file I/O failures after startup.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ledger document (de)serialization failures.
    #[error("Ledger serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Environment variable lookup failures.
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// A conversion amount that is zero, negative or not finite.
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// An exchange rate that is zero, negative or not finite.
    #[error("Invalid rate: {rate}")]
    InvalidRate {
        /// The rejected rate
        rate: f64,
    },

    /// Command registration failures at startup: logged, never fatal.
    #[error("Command registration error: {0}")]
    Registration(Box<poise::serenity_prelude::Error>),

    /// Reply sends and other Discord API failures.
    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Error::Framework(Box::new(value))
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
