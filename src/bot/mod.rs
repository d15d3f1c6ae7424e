//! Telegram dispatcher wiring.
//!
//! Everything Telegram-specific lives here: command routing, update
//! delivery, and the send/edit/photo primitives. Handlers themselves are
//! transport-free (see [`handlers`]), so this module only maps an inbound
//! update to a handler call and a [`Reply`] to outbound API calls.

pub mod handlers;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use log::{debug, info};
use teloxide::dptree;
use teloxide::prelude::*;
use teloxide::types::InputFile;
use teloxide::utils::command::BotCommands;

use crate::bot::handlers::{handle_text, BotState, Reply, SEARCHING_TEXT, START_TEXT};
use crate::config::Config;
use crate::geolocate::GeoClient;
use crate::initialization::init_http_client;
use crate::staticmap::MapClient;
use crate::validate::is_valid_ipv4;

/// Supported bot commands.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
enum Command {
    /// Show the welcome/help text.
    #[command(description = "как пользоваться ботом")]
    Start,
}

/// Runs the bot until the process is stopped.
///
/// Builds the HTTP client and both API clients from the configuration, then
/// enters teloxide's long-polling dispatch loop. Each update is handled
/// independently; a failure in one handler is logged by the dispatcher's
/// error handler and never terminates the process.
pub async fn run_bot(config: Config) -> Result<()> {
    let http = init_http_client()?;

    let state = Arc::new(BotState {
        geo: GeoClient::new(
            http.clone(),
            config.geo_api_url.clone(),
            config.geo_api_lang.clone(),
        ),
        map: MapClient::new(
            http,
            config.map_api_url.clone(),
            config.map_api_key.clone(),
            Duration::from_secs(config.map_timeout_seconds),
        ),
    });

    let bot = Bot::new(&config.bot_token);
    info!("Starting bot (geo API: {})", config.geo_api_url);

    let handler = Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(on_command),
        )
        .branch(dptree::endpoint(on_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .default_handler(|update| async move {
            debug!("Unhandled update: {:?}", update.id);
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

async fn on_command(bot: Bot, msg: Message, cmd: Command) -> ResponseResult<()> {
    match cmd {
        Command::Start => {
            bot.send_message(msg.chat.id, START_TEXT).await?;
        }
    }
    Ok(())
}

async fn on_message(bot: Bot, msg: Message, state: Arc<BotState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    // Commands of other bots and unknown commands get no reply
    if text.trim_start().starts_with('/') {
        return Ok(());
    }

    let chat_id = msg.chat.id;

    // A valid IP means a provider round trip is coming: show a progress
    // message now and edit the answer into it once the lookup finishes.
    // Rejections are instant and sent directly.
    let progress = if is_valid_ipv4(text.trim()) {
        Some(bot.send_message(chat_id, SEARCHING_TEXT).await?)
    } else {
        None
    };

    let reply = handle_text(&state, text).await;

    match &progress {
        Some(sent) => {
            bot.edit_message_text(chat_id, sent.id, reply.text()).await?;
        }
        None => {
            bot.send_message(chat_id, reply.text()).await?;
        }
    }

    if let Reply::TextWithPhoto { png, .. } = reply {
        bot.send_photo(chat_id, InputFile::memory(png).file_name("map.png"))
            .await?;
    }

    Ok(())
}
