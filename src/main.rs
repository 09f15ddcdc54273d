//! Launch Slidev on a presentation by name.
//!
//! `slides-dev demo` runs `pnpm slidev presentations/demo/slides.md` from the
//! project root with the terminal handed over to the tool.
//! Run with `--list` to see which presentations exist.

mod app;
mod config;
mod core;
mod error;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use crate::app::{
    child::ProcessRunner,
    context::LaunchContext,
    launcher,
};
use crate::config::AppConfig;
use crate::core::presentations;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Start Slidev for a named presentation")]
struct Cli {
    /// Presentation directory name under `presentations/`.
    name: Option<String>,

    /// Project root containing the presentations directory.
    #[arg(long, env = "SLIDES_DEV_ROOT")]
    root: Option<PathBuf>,

    /// List available presentations and exit.
    #[arg(long)]
    list: bool,

    /// Write the default config file (if missing) and exit.
    #[arg(long = "init-config")]
    init_config: bool,

    /// Exit with the presentation tool's own status code.
    #[arg(long)]
    forward_exit_code: bool,
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialise tracing (only when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // stdout belongs to the tool
        .init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = config::config_path();
        let written = AppConfig::init_at(&path)
            .with_context(|| format!("cannot write config to {}", path.display()))?;
        if written {
            println!("Wrote {}", path.display());
        } else {
            println!("Config already exists at {}", path.display());
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = AppConfig::load();
    config.forward_exit_code |= cli.forward_exit_code;

    let ctx = LaunchContext::from_env(cli.name, cli.root, config)?;

    if cli.list {
        presentations::list_available(&mut io::stdout(), &ctx.root, &ctx.config);
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = launcher::resolve_and_run(
        &ctx,
        &ProcessRunner,
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .await;

    Ok(ExitCode::from(outcome.exit_code(ctx.config.forward_exit_code)))
}
