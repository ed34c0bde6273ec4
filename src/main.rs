// SPDX-License-Identifier: MIT
// Copyright 2026 The Twotoo Authors

//! Twotoo command-line client
//!
//! Prints a challenge's history timeline or the home screen snapshot as
//! JSON, using the same rules the app screens are built on.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use twotoo::{
    config::Config,
    domain::progress::{auth_type, challenge_phase, home_progress},
    domain::repository::{ChallengeRepository, ViewRepository},
    presenter::history::{self, HistoryEvent, HistoryState},
    time_utils::local_today,
    AppState,
};

const USAGE: &str = "usage: twotoo history <challenge_no> | twotoo home";

enum Command {
    History(u64),
    Home,
}

fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    match args {
        [cmd, no] if cmd == "history" => {
            let no = no
                .parse::<u64>()
                .with_context(|| format!("invalid challenge number {:?}", no))?;
            Ok(Command::History(no))
        }
        [cmd] if cmd == "home" => Ok(Command::Home),
        _ => anyhow::bail!(USAGE),
    }
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Command failed");
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_args(&args)?;

    let config = Config::from_env().context("Failed to load configuration")?;
    let state = AppState::new(config)?;
    tracing::info!(
        api_url = %state.config.api_url,
        timeout_secs = state.config.request_timeout.as_secs(),
        "Starting Twotoo client"
    );
    let today = local_today();

    let output = match command {
        Command::History(challenge_no) => {
            let detail = state.repository.get_challenge_detail(challenge_no).await?;
            let event = HistoryEvent::DetailLoaded { detail, today };
            let (history, _) = history::reduce(HistoryState::default(), event);
            tracing::info!(challenge_no, days = history.slots.len(), "History built");
            serde_json::to_value(&history)?
        }
        Command::Home => {
            let view = state.repository.get_home_view().await?;
            let (my_progress, partner_progress) = home_progress(&view);
            serde_json::json!({
                "phase": challenge_phase(&view, today),
                "auth": view.ongoing.as_ref().map(|_| auth_type(&view, today)),
                "myProgress": my_progress,
                "partnerProgress": partner_progress,
                "view": view,
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Initialize structured JSON logging on stderr.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    for directive in ["twotoo=debug", "info"] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::registry().with(filter).with(format).init();
}
