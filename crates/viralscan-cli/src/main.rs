mod context;
mod scan;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::context::ContextArgs;
use crate::scan::ScanArgs;

#[derive(Debug, Parser)]
#[command(name = "viralscan")]
#[command(about = "Find the keywords, hashtags and phrases shared by high-engagement posts")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search every topic and print the pattern report as JSON (default)
    Scan(ScanArgs),
    /// Print a trending-topics prompt block from a saved report
    Context(ContextArgs),
}

/// Log to stderr so stdout carries nothing but the JSON document.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Context(args)) => {
            init_tracing("info");
            match context::run_context(&args, chrono::Utc::now()) {
                Ok(text) => {
                    println!("{text}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    let message = format!("{e:#}");
                    tracing::error!(error = %message, "context generation failed");
                    ExitCode::FAILURE
                }
            }
        }
        command => {
            let args = match command {
                Some(Commands::Scan(args)) => args,
                _ => ScanArgs::default(),
            };
            let config = match viralscan_core::load_scan_config()
                .and_then(|mut config| args.apply(&mut config).map(|()| config))
            {
                Ok(config) => config,
                Err(e) => return scan::emit(&scan::ScanExit::failure(e.to_string())),
            };
            init_tracing(&config.log_level);
            tracing::debug!(?config, "loaded scan configuration");
            scan::run(&config).await
        }
    }
}
