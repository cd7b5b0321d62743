use anyhow::Context;

use mood_signal::classifier::MoodEngine;
use mood_signal::cli::{self, Mode};
use mood_signal::config::Config;
use mood_signal::server::routes;
use mood_signal::sounds::SoundBoard;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the JSON result.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let engine = MoodEngine::new();

    match Mode::parse(&args) {
        Mode::Help => {
            eprintln!("{}", cli::USAGE);
        }
        Mode::Classify(input) => {
            let line = cli::run(&input, |key| std::env::var(key).ok(), &engine).await;
            println!("{line}");
        }
        Mode::Serve => {
            let config = Config::from_env()?;
            let sounds = config
                .sounds_dir
                .as_deref()
                .map(SoundBoard::new)
                .transpose()
                .context("failed to open sounds directory")?;
            if let Some(board) = &sounds {
                tracing::info!(root = %board.root().display(), "Sound reactions enabled");
            }

            let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
                .await
                .with_context(|| format!("failed to bind port {}", config.port))?;
            tracing::info!(port = config.port, "Mood Signal HTTP server started");
            axum::serve(listener, routes(engine, sounds)).await?;
        }
    }

    Ok(())
}
