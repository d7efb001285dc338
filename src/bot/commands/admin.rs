//! Admin-only configuration commands - `setrate` and `setlogs`.
//!
//! Authorization is enforced by Discord itself: both commands are
//! registered with administrator-only default member permissions, so a
//! non-admin invocation never reaches these handlers.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use tracing::info;

    /// Sets the exchange rate (INR per 1 USDT).
    #[poise::command(slash_command, default_member_permissions = "ADMINISTRATOR")]
    pub async fn setrate(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "New rate"] rate: f64,
    ) -> Result<()> {
        info!(
            "setrate command received from user: {} for rate: {}",
            ctx.author().name,
            rate
        );

        if !rate.is_finite() || rate <= 0.0 {
            ctx.say("❌ Invalid rate: must be greater than zero").await?;
            return Ok(());
        }

        ctx.data().store.set_rate(rate).await?;
        ctx.say(format!("✅ Rate updated: 1 USDT = ₹{rate}")).await?;

        Ok(())
    }

    /// Sets the channel conversions are echoed into.
    #[poise::command(slash_command, default_member_permissions = "ADMINISTRATOR")]
    pub async fn setlogs(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Logs channel"] channel: serenity::ChannelId,
    ) -> Result<()> {
        info!(
            "setlogs command received from user: {} for channel: {}",
            ctx.author().name,
            channel
        );

        ctx.data().store.set_log_channel(channel.get()).await?;
        ctx.say("✅ Logs channel set").await?;

        Ok(())
    }
}

// Re-export all commands
pub use inner::*;

#[cfg(test)]
mod tests {
    use poise::serenity_prelude as serenity;

    #[test]
    fn test_admin_commands_are_gated_before_dispatch() {
        // Discord enforces these; a non-admin caller never reaches the
        // handlers.
        for command in [super::setrate(), super::setlogs()] {
            assert_eq!(
                command.default_member_permissions,
                serenity::Permissions::ADMINISTRATOR,
                "command `{}` must be admin-only",
                command.name
            );
        }
    }
}
