use std::fs;
use std::path::PathBuf;
use std::process;
use std::sync::{Arc, RwLock};

use clap::Parser;

use ku_engine::api::{self, AppState};
use ku_engine::harvest::{read_vocab, run_harvest, HarvestWorker, SharedSources};
use ku_engine::ku_core::Vocabulary;
use ku_engine::settings;
use ku_engine::source::web_sources;
use ku_engine::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "haikud", about = "Error-message haiku HTTP service")]
struct Cli {
    /// Settings TOML replacing the built-in defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Listen address (overrides server.bind)
    #[arg(long)]
    bind: Option<String>,
    /// Start with an empty pool instead of harvesting first
    #[arg(long)]
    no_initial_harvest: bool,
    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
    /// Write logs to haikud.log in this directory instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    process::exit(1);
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.json_logs, cli.log_dir.as_deref());

    if let Some(path) = &cli.config {
        let content = fs::read_to_string(path)
            .unwrap_or_else(|e| fail(format!("Error reading {}: {e}", path.display())));
        settings::init_custom(content).unwrap_or_else(|e| fail(format!("Error: {e}")));
    }
    let s = settings::settings();

    let sources: SharedSources = Arc::new(
        web_sources(&s.source).unwrap_or_else(|e| fail(format!("Error: {e}"))),
    );
    let vocab = Arc::new(RwLock::new(Vocabulary::new()));

    let initial_harvest = s.server.initial_harvest && !cli.no_initial_harvest;
    if initial_harvest && read_vocab(&vocab).is_empty() {
        tracing::info!(sources = sources.len(), "initial harvest");
        run_harvest(&vocab, &sources);
    }

    let worker = HarvestWorker::spawn(Arc::clone(&vocab), sources)
        .unwrap_or_else(|e| fail(format!("Error starting harvest worker: {e}")));
    let state = Arc::new(AppState { vocab, worker });

    let bind = cli.bind.as_deref().unwrap_or(&s.server.bind);
    if let Err(e) = api::serve(state, bind) {
        fail(format!("Error: {e}"));
    }
}
