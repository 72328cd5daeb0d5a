use std::fs;
use std::process;

use clap::{Parser, Subcommand};

use kana_cli::commands::{config_ops, convert_ops, inspect_ops};

#[derive(Parser)]
#[command(name = "kanatool", about = "Japanese width/kana/case conversion tool")]
struct Cli {
    /// Custom settings TOML (replaces the embedded defaults)
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text (reads stdin line by line when TEXT is omitted)
    Convert {
        /// Named preset from the settings, applied before any --step
        #[arg(long)]
        preset: Option<String>,
        /// Conversion step: upper, lower, hiragana, katakana, wide[:groups], narrow[:groups]
        #[arg(long = "step", value_name = "STEP")]
        steps: Vec<String>,
        /// Text to convert
        text: Option<String>,
    },
    /// Show per-character classification and width forms
    Inspect {
        /// Text to inspect
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List presets from the active settings
    Presets,
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn load_settings(path: &str) {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {path}: {e}");
        process::exit(1);
    });
    if let Err(e) = kana_core::settings::init_custom(content) {
        eprintln!("Error in {path}: {e}");
        process::exit(1);
    }
}

fn main() {
    let cli = Cli::parse();

    if let Some(ref path) = cli.settings {
        load_settings(path);
    }

    match cli.command {
        Command::Convert {
            preset,
            steps,
            text,
        } => convert_ops::convert_cmd(preset.as_deref(), &steps, text.as_deref()),
        Command::Inspect { text, json } => inspect_ops::inspect_cmd(&text, json),
        Command::Presets => config_ops::presets_list(),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
