mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("WRAPPED_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::output_error(&format!("{:#}", e));
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Render(args) => {
            let ctx = CliContext::load(args.deck.deck.as_deref(), config_path)?;
            handlers::render::handle(&ctx, &args)?;
        }
        Commands::Inspect(args) => {
            let ctx = CliContext::load(args.deck.as_deref(), config_path)?;
            handlers::inspect::handle(&ctx)?;
        }
        Commands::Walk(args) => {
            let ctx = CliContext::load(args.deck.deck.as_deref(), config_path)?;
            handlers::walk::handle(ctx, &args.steps).await?;
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "wrapped", &mut std::io::stdout());
        }
    }

    Ok(())
}
