//! Startup helpers for the terminal trail client.
//!
//! Wires logging, configuration and the HTTP client, then runs a line
//! oriented conversation loop against the search backend.

use std::process::ExitCode;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::api::client::SearchClient;
use crate::app::App;
use crate::chat::message::Role;
use crate::config::{API_URL_ENV, AppConfig};

/// Run the terminal client (used by the `cevennes-trails` binary).
///
/// # Returns
/// `ExitCode::SUCCESS` on normal exit, `1` on failure.
#[must_use]
pub fn run() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    tracing::info!("Starting Cévennes trails client v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::from_env();
    tracing::info!("Backend endpoint: {} (override with {API_URL_ENV})", config.api_base_url);

    let client = match SearchClient::new(&config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to create client: {e}");
            return ExitCode::from(1);
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create runtime: {e}");
            return ExitCode::from(1);
        }
    };

    if let Err(e) = rt.block_on(run_repl(config, client)) {
        tracing::error!("Client error: {e}");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

/// Conversation loop: one stdin line per turn, `quit` to exit.
async fn run_repl(config: AppConfig, client: SearchClient) -> anyhow::Result<()> {
    let mut app = App::new(config, client);
    app.load_boundary().await;

    if let Some(greeting) = app.session().transcript().first() {
        println!("assistant> {}", greeting.content.display_text());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }

        let before = app.session().transcript().len();
        app.send_message(input).await;

        for message in &app.session().transcript()[before..] {
            if message.role == Role::Assistant {
                println!("assistant> {}", message.content.display_text());
            }
        }

        match app.list().placeholder() {
            Some(placeholder) if before < app.session().transcript().len() => {
                println!("{placeholder}");
            }
            _ => {
                for card in app.list().cards() {
                    println!(
                        "  {} {} — {} · {} · {}",
                        card.practice_icon,
                        card.title,
                        card.duration_label,
                        card.distance_label,
                        card.elevation_label
                    );
                }
            }
        }
    }

    Ok(())
}
