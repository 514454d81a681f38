//! seoscribe CLI and REST API entry point.
//!
//! Binary name: `scribe`
//!
//! Parses CLI arguments, loads configuration and the API key, then dispatches
//! to the appropriate command handler or starts the REST API server.

mod cli;
mod http;
mod notice;
mod state;

use clap::Parser;
use clap_complete::generate;

use seoscribe_infra::secret::env::load_dotenv;
use seoscribe_observe::tracing_setup::{filter_for_verbosity, init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use notice::Reported;
use state::AppState;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Before tracing so RUST_LOG from .env applies.
    let dotenv_path = load_dotenv();

    if let Err(e) = init_tracing(filter_for_verbosity(cli.verbose, cli.quiet), cli.otel) {
        eprintln!("Warning: failed to initialize tracing: {e}");
    }
    if let Some(path) = dotenv_path {
        tracing::debug!(path = %path.display(), "environment loaded from .env");
    }

    let result = run(cli).await;
    shutdown_tracing();

    if let Err(err) = result {
        if !err.is::<Reported>() {
            eprintln!(
                "  {} {err:#}",
                console::style("Error:").red().bold()
            );
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "scribe", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init(cli.config.as_deref()).await?;

    match cli.command {
        Commands::Generate(args) => {
            cli::generate::generate(&state, args, cli.json, cli.quiet).await?;
        }

        Commands::Test => {
            cli::test_api::test_api(&state, cli.json, cli.quiet).await?;
        }

        Commands::Serve { port, host } => {
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} seoscribe API listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
