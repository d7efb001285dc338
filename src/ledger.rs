//! Ledger entity - the persisted exchange document.
//!
//! A single JSON document holds the current rate, the optional log channel,
//! per-user cumulative conversion totals and the guild-wide aggregate.
//! Field names keep the document's original camelCase wire shape.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Cumulative conversion totals, either for one user or guild-wide.
///
/// Totals only ever increase; there is no correction or reset path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// USDT converted so far
    pub stablecoin_total: f64,
    /// INR converted so far
    pub fiat_total: f64,
}

/// The full exchange document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    /// INR per 1 USDT, admin-configurable
    pub rate: f64,
    /// Destination channel for conversion echoes, unset until `/setlogs`
    pub log_channel_id: Option<String>,
    /// Per-user cumulative totals, keyed by Discord user id
    pub users: HashMap<String, Totals>,
    /// Guild-wide aggregate over `users`
    pub totals: Totals,
}

impl Ledger {
    /// Adds a conversion to the user's entry and the global totals.
    ///
    /// The entry is created with a zero baseline on first appearance. Both
    /// sides are updated in the same call, so `totals` always equals the
    /// sum over `users`.
    pub fn record_conversion(&mut self, user_id: &str, stablecoin: f64, fiat: f64) {
        let entry = self.users.entry(user_id.to_string()).or_default();
        entry.stablecoin_total += stablecoin;
        entry.fiat_total += fiat;

        self.totals.stablecoin_total += stablecoin;
        self.totals.fiat_total += fiat;
    }

    /// Totals for one user; zero totals when the user has never converted.
    #[must_use]
    pub fn user_totals(&self, user_id: &str) -> Totals {
        self.users.get(user_id).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    fn empty_ledger(rate: f64) -> Ledger {
        Ledger {
            rate,
            log_channel_id: None,
            users: HashMap::new(),
            totals: Totals::default(),
        }
    }

    fn sum_over_users(ledger: &Ledger) -> Totals {
        let mut sum = Totals::default();
        for totals in ledger.users.values() {
            sum.stablecoin_total += totals.stablecoin_total;
            sum.fiat_total += totals.fiat_total;
        }
        sum
    }

    #[test]
    fn test_record_conversion_creates_entry_with_zero_baseline() {
        let mut ledger = empty_ledger(90.0);

        ledger.record_conversion("user1", 10.0, 900.0);

        let entry = ledger.users.get("user1").unwrap();
        assert_eq!(entry.stablecoin_total, 10.0);
        assert_eq!(entry.fiat_total, 900.0);
        assert_eq!(ledger.totals.stablecoin_total, 10.0);
        assert_eq!(ledger.totals.fiat_total, 900.0);
    }

    #[test]
    fn test_record_conversion_accumulates_per_user() {
        let mut ledger = empty_ledger(90.0);

        ledger.record_conversion("user1", 10.0, 900.0);
        ledger.record_conversion("user1", 5.0, 450.0);

        let entry = ledger.users.get("user1").unwrap();
        assert_eq!(entry.stablecoin_total, 15.0);
        assert_eq!(entry.fiat_total, 1350.0);
    }

    #[test]
    fn test_totals_equal_sum_over_users_after_every_mutation() {
        let mut ledger = empty_ledger(90.0);
        let conversions = [
            ("user1", 10.0, 900.0),
            ("user2", 2.5, 225.0),
            ("user1", 1.0, 90.0),
            ("user3", 0.5, 45.0),
        ];

        for (user_id, stablecoin, fiat) in conversions {
            ledger.record_conversion(user_id, stablecoin, fiat);
            assert_eq!(ledger.totals, sum_over_users(&ledger));
        }
    }

    #[test]
    fn test_user_totals_zero_for_unknown_user() {
        let ledger = empty_ledger(90.0);

        let totals = ledger.user_totals("nobody");
        assert_eq!(totals.stablecoin_total, 0.0);
        assert_eq!(totals.fiat_total, 0.0);
    }

    #[test]
    fn test_document_keeps_camel_case_wire_shape() {
        let mut ledger = empty_ledger(90.0);
        ledger.log_channel_id = Some("42".to_string());
        ledger.record_conversion("user1", 10.0, 900.0);

        let json = serde_json::to_string(&ledger).unwrap();
        assert!(json.contains("\"logChannelId\""));
        assert!(json.contains("\"stablecoinTotal\""));
        assert!(json.contains("\"fiatTotal\""));
        assert!(json.contains("\"users\""));
        assert!(json.contains("\"totals\""));
    }

    #[test]
    fn test_document_parses_original_shape() {
        let json = r#"{
            "rate": 90.0,
            "logChannelId": null,
            "users": { "user1": { "stablecoinTotal": 10.0, "fiatTotal": 900.0 } },
            "totals": { "stablecoinTotal": 10.0, "fiatTotal": 900.0 }
        }"#;

        let ledger: Ledger = serde_json::from_str(json).unwrap();
        assert_eq!(ledger.rate, 90.0);
        assert_eq!(ledger.log_channel_id, None);
        assert_eq!(ledger.user_totals("user1").fiat_total, 900.0);
        assert_eq!(ledger.totals, sum_over_users(&ledger));
    }
}
