//! FFBot - fantasy football assistant
//!
//! Console host for the FFBot dialog. Replies go to stdout; logs go to
//! stderr (filtered by `RUST_LOG`).

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod bot_runtime;
mod console;
mod ffbot;
mod platform;
mod state;

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting FFBot");

    let source = platform::ConfigSource::detect();
    let config = match source.load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(source = %source, "Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        source = %source,
        policy = ?config.bot.policy,
        ranked_players = config.rankings().len(),
        "Configuration loaded"
    );

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = Arc::new(state::AppState::new(config));
    let bot_runtime = bot_runtime::BotRuntime::new(app_state.clone());
    let session =
        console::ConsoleSession::new(app_state, bot_runtime, platform::console_user_id());

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    if let Err(e) = runtime.block_on(console::run(session, stdin, &mut stdout)) {
        tracing::error!("Console session failed: {}", e);
        std::process::exit(1);
    }
}
