//! Durable ledger store - atomic JSON persistence with serialized access.
//!
//! The ledger is loaded once at startup and held behind a mutex; every
//! mutating operation updates the document and rewrites the file inside
//! the same lock scope, so interleaved commands cannot lose updates and
//! durable storage reflects a mutation by the time its call returns.
//! Writes go to a temporary file first and are renamed into place, so the
//! file on disk is always either the old or the new document, never a
//! partial write.

use crate::core::convert;
use crate::errors::{Error, Result};
use crate::ledger::{Ledger, Totals};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Outcome of a single conversion, used for the reply and the log echo.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Conversion {
    /// USDT side of the conversion
    pub stablecoin: f64,
    /// INR side of the conversion
    pub fiat: f64,
}

/// Shared handle to the in-memory ledger and its backing file.
#[derive(Debug)]
pub struct ExchangeStore {
    path: PathBuf,
    tmp_path: PathBuf,
    ledger: Mutex<Ledger>,
}

impl ExchangeStore {
    /// Loads the ledger document from `path`.
    ///
    /// A missing or malformed file is a startup-fatal configuration error;
    /// there is no default-document bootstrap.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let contents = fs::read_to_string(&path).await.map_err(|e| Error::Config {
            message: format!("failed to read ledger file {}: {e}", path.display()),
        })?;
        let ledger: Ledger = serde_json::from_str(&contents).map_err(|e| Error::Config {
            message: format!("failed to parse ledger file {}: {e}", path.display()),
        })?;

        info!(path = %path.display(), rate = ledger.rate, "Ledger loaded");

        let tmp_path = tmp_path_for(&path);
        Ok(Self {
            path,
            tmp_path,
            ledger: Mutex::new(ledger),
        })
    }

    /// Current exchange rate (INR per 1 USDT).
    pub async fn rate(&self) -> f64 {
        self.ledger.lock().await.rate
    }

    /// Converts a USDT amount into INR for `user_id`, records the totals
    /// and persists the document.
    pub async fn convert_to_fiat(&self, user_id: &str, amount: f64) -> Result<Conversion> {
        let mut ledger = self.ledger.lock().await;
        let fiat = convert::to_fiat(amount, ledger.rate)?;

        ledger.record_conversion(user_id, amount, fiat);
        self.save(&ledger).await?;

        Ok(Conversion {
            stablecoin: amount,
            fiat,
        })
    }

    /// Converts an INR amount into USDT for `user_id`, records the totals
    /// and persists the document.
    pub async fn convert_to_stablecoin(&self, user_id: &str, amount: f64) -> Result<Conversion> {
        let mut ledger = self.ledger.lock().await;
        let stablecoin = convert::to_stablecoin(amount, ledger.rate)?;

        ledger.record_conversion(user_id, stablecoin, amount);
        self.save(&ledger).await?;

        Ok(Conversion {
            stablecoin,
            fiat: amount,
        })
    }

    /// Overwrites the exchange rate and persists the document.
    pub async fn set_rate(&self, rate: f64) -> Result<()> {
        convert::validate_rate(rate)?;

        let mut ledger = self.ledger.lock().await;
        ledger.rate = rate;
        self.save(&ledger).await
    }

    /// Overwrites the log channel and persists the document.
    pub async fn set_log_channel(&self, channel_id: u64) -> Result<()> {
        let mut ledger = self.ledger.lock().await;
        ledger.log_channel_id = Some(channel_id.to_string());
        self.save(&ledger).await
    }

    /// Configured log channel id, if any. A stored id that does not parse
    /// is treated as unconfigured.
    pub async fn log_channel(&self) -> Option<u64> {
        let ledger = self.ledger.lock().await;
        ledger
            .log_channel_id
            .as_deref()
            .and_then(|id| id.parse().ok())
    }

    /// Totals for `user_id` (zero when absent) plus the global aggregate.
    pub async fn stats(&self, user_id: &str) -> (Totals, Totals) {
        let ledger = self.ledger.lock().await;
        (ledger.user_totals(user_id), ledger.totals)
    }

    /// Serializes the full document and writes it atomically (tmp → rename).
    async fn save(&self, ledger: &Ledger) -> Result<()> {
        let json = serde_json::to_string_pretty(ledger)?;

        fs::write(&self.tmp_path, &json).await?;
        fs::rename(&self.tmp_path, &self.path).await?;

        debug!(path = %self.path.display(), "Ledger saved");
        Ok(())
    }
}

/// Sibling path the atomic write stages into before the rename.
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp: OsString = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}
