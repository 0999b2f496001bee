use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use marklint_checker::Checker;

#[derive(Parser)]
#[command(name = "marklint")]
#[command(about = "marklint — markup tag balance checker")]
#[command(version)]
struct Cli {
    /// Markup or template file to scan
    path: PathBuf,

    /// Output format for diagnostics
    #[arg(long, value_enum, default_value = "text")]
    format: Format,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One human-readable line per finding; silence means balanced
    Text,
    /// All findings as a JSON array
    Json,
}

fn main() {
    let cli = Cli::parse();

    let diagnostics = match Checker::check_file(&cli.path) {
        Ok(diagnostics) => diagnostics,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    match cli.format {
        Format::Text => {
            for diagnostic in &diagnostics {
                println!("{diagnostic}");
            }
        }
        Format::Json => match serde_json::to_string_pretty(&diagnostics) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: failed to serialize diagnostics: {e}");
                std::process::exit(2);
            }
        },
    }

    if !diagnostics.is_empty() {
        std::process::exit(1);
    }
}
