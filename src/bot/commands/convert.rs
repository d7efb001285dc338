//! Conversion commands - `c2i` and `i2c`.
//!
//! Both commands read the current rate, record the caller's cumulative
//! totals through the store and echo the conversion into the configured
//! log channel.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, notifier},
        core::convert,
        errors::{Error, Result},
    };
    use tracing::info;

    /// Converts a USDT amount into INR at the current rate.
    #[poise::command(slash_command)]
    pub async fn c2i(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "USDT amount"] amount: f64,
    ) -> Result<()> {
        info!(
            "c2i command received from user: {} for amount: {}",
            ctx.author().name,
            amount
        );

        if !amount.is_finite() || amount <= 0.0 {
            ctx.say("❌ Invalid amount: must be greater than zero")
                .await?;
            return Ok(());
        }

        let caller_id = ctx.author().id.to_string();
        let conversion = ctx.data().store.convert_to_fiat(&caller_id, amount).await?;

        ctx.say(convert::fiat_reply(amount, conversion.fiat)).await?;
        notifier::notify(&ctx, &convert::fiat_log_line(amount, conversion.fiat)).await;

        Ok(())
    }

    /// Converts an INR amount into USDT at the current rate.
    #[poise::command(slash_command)]
    pub async fn i2c(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "INR amount"] amount: f64,
    ) -> Result<()> {
        info!(
            "i2c command received from user: {} for amount: {}",
            ctx.author().name,
            amount
        );

        if !amount.is_finite() || amount <= 0.0 {
            ctx.say("❌ Invalid amount: must be greater than zero")
                .await?;
            return Ok(());
        }

        let caller_id = ctx.author().id.to_string();
        let conversion = ctx
            .data()
            .store
            .convert_to_stablecoin(&caller_id, amount)
            .await?;

        ctx.say(convert::stablecoin_reply(amount, conversion.stablecoin))
            .await?;
        notifier::notify(
            &ctx,
            &convert::stablecoin_log_line(amount, conversion.stablecoin),
        )
        .await;

        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
