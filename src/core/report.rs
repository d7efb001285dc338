//! Stats report rendering.
//!
//! Framework-agnostic: the bot layer supplies the display tag and the
//! totals, this module produces the reply text.

use crate::core::convert::{format_fiat, format_stablecoin};
use crate::ledger::Totals;

/// Builds the `/stats` reply: one user's totals plus the guild-wide
/// aggregate, in the fixed multi-line template.
#[must_use]
pub fn stats_report(user_tag: &str, user: Totals, global: Totals) -> String {
    format!(
        "📊 Exchange Stats\n\n\
         User: {user_tag}\n\
         USDT: {}\n\
         INR: {}\n\n\
         🌍 Global Totals\n\
         USDT: {}\n\
         INR: {}",
        format_stablecoin(user.stablecoin_total),
        format_fiat(user.fiat_total),
        format_stablecoin(global.stablecoin_total),
        format_fiat(global.fiat_total),
    )
}
