mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use tracing_subscriber::EnvFilter;

fn init_tracing() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("MODTAC_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_writer(log_file)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        // stdout carries the JSON envelope.
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "modtac", &mut std::io::stdout());
        return Ok(());
    }

    let ctx = CliContext::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve(args) => handlers::gallery::handle_serve(&ctx, args).await?,
        Commands::Gallery(gallery_cmd) => {
            handlers::gallery::handle(&ctx, gallery_cmd.action).await?;
        }
        Commands::Layout(args) => handlers::layout::handle(&ctx, args).await?,
        Commands::Columns(args) => handlers::grid::handle(&ctx, args)?,
        Commands::Telemetry(args) => handlers::telemetry::handle(&ctx, args)?,
        Commands::Caption(args) => handlers::motion::handle_caption(&ctx, args)?,
        Commands::Intro(args) => handlers::motion::handle_intro(&ctx, args)?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}
