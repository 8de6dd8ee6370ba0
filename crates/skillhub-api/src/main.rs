//! Skillhub CLI and REST API entry point.
//!
//! Binary name: `skillhub`
//!
//! Parses CLI arguments, connects to the skill store, then dispatches to the
//! appropriate command handler or starts the REST API server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use skillhub_infra::config::load_service_config;
use skillhub_infra::store::default_database_url;
use skillhub_observe::tracing_setup::{init_tracing, shutdown_tracing};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,skillhub=debug",
        _ => "trace",
    };
    init_tracing(filter, cli.otel).map_err(|e| anyhow::anyhow!("{e}"))?;

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "skillhub", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_service_config(cli.config.as_deref()).await;
    let database_url = match cli.database_url.clone() {
        Some(url) => url,
        None => {
            let data_dir = skillhub_infra::store::resolve_data_dir();
            tokio::fs::create_dir_all(&data_dir).await?;
            default_database_url()
        }
    };

    let state = AppState::init(&database_url, &config).await?;
    tracing::debug!(backend = state.backend, "skill store ready");

    let result = run(cli, state).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli, state: AppState) -> anyhow::Result<()> {
    match cli.command {
        Commands::List => cli::skill::list_skills(&state, cli.json).await?,

        Commands::Show { key } => cli::skill::show_skill(&state, &key, cli.json).await?,

        Commands::Create { file } => cli::skill::create_skill(&state, &file, cli.json).await?,

        Commands::Serve { port, host } => {
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            if !cli.quiet {
                println!(
                    "  {} Skillhub API listening on {} ({} store)",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan(),
                    state.backend
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }
            tracing::info!(%addr, backend = state.backend, "serving skill catalog");

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
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
}
