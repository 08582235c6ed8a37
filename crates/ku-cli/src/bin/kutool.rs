use clap::{Parser, Subcommand};

use ku_cli::commands::{config_ops, text_ops};

#[derive(Parser)]
#[command(name = "kutool", about = "Error-haiku word pool diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Estimate syllable counts
    Syllables {
        /// Words to estimate
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Show how tokens are split into sub-words
    Split {
        /// Tokens to split (case matters for camelCase)
        #[arg(required = true)]
        tokens: Vec<String>,
    },
    /// Generate haikus from a text file (one fragment per line)
    Haiku {
        /// Input text file
        file: String,
        /// Number of haikus to generate
        #[arg(short, long, default_value = "1")]
        n: usize,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Ingest a text file and show the syllable distribution
    Stats {
        /// Input text file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Settings TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Syllables { words } => text_ops::syllables(&words),
        Command::Split { tokens } => text_ops::split(&tokens),
        Command::Haiku { file, n, seed } => text_ops::haiku(&file, n, seed),
        Command::Stats { file } => text_ops::stats(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
