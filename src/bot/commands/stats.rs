//! Statistics command - per-user and global conversion totals.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        core::report,
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use tracing::info;

    /// Shows exchange totals for a user (the caller when omitted) and for
    /// the whole guild.
    #[poise::command(slash_command)]
    pub async fn stats(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Check specific user"] user: Option<serenity::User>,
    ) -> Result<()> {
        let target = user.as_ref().unwrap_or_else(|| ctx.author());
        info!(
            "stats command received from user: {} for target: {}",
            ctx.author().name,
            target.name
        );

        // Users with no recorded conversions report zero totals.
        let (user_totals, global_totals) = ctx.data().store.stats(&target.id.to_string()).await;

        ctx.say(report::stats_report(&target.tag(), user_totals, global_totals))
            .await?;

        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
