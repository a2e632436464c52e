mod cli;
mod cli_modes;
mod render;

use anyhow::Result;
use cli::{Cli, Command};
use cli_modes::{
    CliModeResult, Context, add_mode, color_mode, delete_mode, list_mode, login_mode, logout_mode,
    paths_mode, register_mode, search_mode, show_mode, suggestions_mode, use_color,
};
use render::{RenderOptions, Renderer};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vibes_core::Config;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("vibes: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr, filtered by `VIBES_LOG` (e.g. `VIBES_LOG=vibes_core=debug`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("VIBES_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::new();
    let config = Config::load()?;
    let renderer = Renderer::new(Some(RenderOptions {
        date_format: config.date_format.clone(),
        use_color: use_color(&cli),
        short_mode: false,
    }));
    let mut ctx = Context::new(config, renderer);

    let result = match &cli.command {
        None => list_mode(&mut ctx, &Default::default()).await?,
        Some(Command::List(args)) => list_mode(&mut ctx, args).await?,
        Some(Command::Register {
            username,
            email,
            password,
        }) => register_mode(&ctx, username, email, password.as_deref()).await?,
        Some(Command::Login { email, password }) => {
            login_mode(&ctx, email, password.as_deref()).await?
        }
        Some(Command::Logout) => logout_mode(&ctx)?,
        Some(Command::Show { id }) => show_mode(&ctx, id).await?,
        Some(Command::Add(args)) => add_mode(&ctx, args).await?,
        Some(Command::Delete { id, yes }) => delete_mode(&ctx, id, *yes).await?,
        Some(Command::Search { query }) => search_mode(&ctx, query).await?,
        Some(Command::Suggestions) => suggestions_mode(&ctx).await?,
        Some(Command::Color { image }) => color_mode(&ctx, image).await?,
        Some(Command::Paths) => paths_mode(&ctx)?,
    };

    if let CliModeResult::NothingToDo = result {
        tracing::debug!("command finished without changes");
    }
    Ok(())
}
