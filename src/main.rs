//! Mixing console configuration editor.
//!
//! Loads a flat snapshot (`schema` "6"), lets the operator inspect, rename
//! and swap channels, and writes the result back in the same flat format.
//!
//! # Architecture Overview
//!
//! ```text
//!   snapshot.json ──▶ tree::nest ──▶ ConfigModel ◀──┐
//!                                        │           │
//!                                        ▼           │
//!   operator ──▶ shell ──▶ Editor ──▶ swap engine ───┘
//!                            │
//!                            ▼
//!               validation (stereo pairs)
//!                            │
//!                            ▼
//!               tree::flatten ──▶ report::writer ──▶ output.json
//! ```

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use mixer_edit::config::{apply_overrides, load_or_default};
use mixer_edit::observability::logging::init_logging;
use mixer_edit::shell::{Mode, Shell};
use mixer_edit::Editor;

#[derive(Parser)]
#[command(name = "mixer-edit")]
#[command(about = "Inspect and rearrange channels in a mixing console snapshot", long_about = None)]
struct Cli {
    /// Console snapshot (flat JSON).
    input: PathBuf,

    /// Editor settings file (TOML).
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Overwrite existing output files without asking.
    #[arg(short = 'y', long)]
    yes: bool,

    /// Read commands from a file instead of the terminal.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_or_default(cli.settings.as_deref())?;
    apply_overrides(&mut config, cli.log_level, cli.yes)?;

    init_logging(&config.observability.log_level)?;
    tracing::info!("mixer-edit v{} starting", env!("CARGO_PKG_VERSION"));

    let editor = Editor::load_file(&cli.input, config.console.clone())
        .with_context(|| format!("loading {}", cli.input.display()))?;

    let stdout = io::stdout();
    match cli.script {
        Some(script) => {
            let file = File::open(&script)
                .with_context(|| format!("opening script {}", script.display()))?;
            Shell::new(editor, BufReader::new(file), stdout.lock(), Mode::Script, &config.shell).run()?;
        }
        None => {
            let stdin = io::stdin();
            Shell::new(editor, stdin.lock(), stdout.lock(), Mode::Interactive, &config.shell).run()?;
        }
    }

    tracing::info!("Session closed");
    Ok(())
}
