//! Best-effort log-channel echo of conversions.
//!
//! Failures here never reach the invoking user: no configured channel, an
//! unparseable stored id or a denied send all degrade to a debug log line.

use crate::bot::{BotData, Error};
use poise::serenity_prelude as serenity;
use tracing::debug;

/// Sends `📊 {caller tag} | {summary}` to the configured log channel, if
/// one is set.
pub async fn notify(ctx: &poise::Context<'_, BotData, Error>, summary: &str) {
    let Some(channel_id) = ctx.data().store.log_channel().await else {
        return;
    };

    let line = notify_line(&ctx.author().tag(), summary);
    if let Err(e) = serenity::ChannelId::new(channel_id)
        .say(ctx.serenity_context(), line)
        .await
    {
        debug!("Failed to echo conversion to log channel {channel_id}: {e}");
    }
}

/// The one-line echo sent to the log channel.
#[must_use]
pub fn notify_line(caller_tag: &str, summary: &str) -> String {
    format!("📊 {caller_tag} | {summary}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::convert;

    #[test]
    fn test_notify_line_contains_caller_and_summary() {
        let line = notify_line("trader#1234", &convert::fiat_log_line(10.0, 900.0));
        assert_eq!(line, "📊 trader#1234 | 10 USDT → ₹900.00");
    }
}
