//! Bot layer - Discord-specific interface and command handlers.
//!
//! This module provides the Discord interface for the exchange bot: the
//! five slash commands, the log-channel notifier, and the shared context
//! handed to every command invocation.

/// Slash command implementations (convert, admin, stats)
pub mod commands;

/// Best-effort log-channel echo of conversions
pub mod notifier;

use crate::errors;
use crate::store::ExchangeStore;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info};

/// Shared data available to all bot commands.
///
/// Every command reads and mutates the ledger through the injected store;
/// there is no other process-wide state.
pub struct BotData {
    /// Serialized-access handle to the exchange ledger
    pub store: Arc<ExchangeStore>,
}

impl BotData {
    /// Creates the shared context handed to every command invocation.
    #[must_use]
    pub fn new(store: Arc<ExchangeStore>) -> Self {
        Self { store }
    }
}

pub(crate) type Error = errors::Error;

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            panic!("Failed to start bot: {error:?}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            // A failed reply is fatal for this invocation only.
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(format!("An error occurred: {error}")).await {
                error!("Failed to send error message: {e}");
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {e}");
            }
        }
    }
}

/// Builds the poise framework, registers the command set in the configured
/// guild and runs the client until it exits.
pub async fn run_bot(
    token: String,
    guild_id: u64,
    store: Arc<ExchangeStore>,
) -> Result<(), serenity::Error> {
    let guild_id = serenity::GuildId::new(guild_id);

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::c2i(),
                commands::i2c(),
                commands::setrate(),
                commands::setlogs(),
                commands::stats(),
            ],
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                // Stale commands are tolerable; a failed registration must
                // not take the bot down.
                match poise::builtins::register_in_guild(
                    ctx,
                    &framework.options().commands,
                    guild_id,
                )
                .await
                {
                    Ok(()) => info!("Registered commands in guild {guild_id}"),
                    Err(e) => {
                        let e = Error::Registration(Box::new(e));
                        error!("Failed to register commands in guild {guild_id}: {e}");
                    }
                }
                Ok(BotData::new(store))
            })
        })
        .build();

    let intents = serenity::GatewayIntents::GUILDS;

    info!("Setting up Serenity client for Poise framework...");
    let client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await;

    match client {
        Ok(mut c) => {
            info!("Starting bot client...");
            if let Err(why) = c.start().await {
                error!("Client error: {why:?}");
                return Err(why);
            }
        }
        Err(e) => {
            error!("Error creating client: {e:?}");
            return Err(e);
        }
    }
    Ok(())
}
