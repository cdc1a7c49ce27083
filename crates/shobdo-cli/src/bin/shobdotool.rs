use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use shobdo_cli::commands::{classify_ops, convert_ops, table_ops};
use shobdo_core::Direction;

#[derive(Parser)]
#[command(name = "shobdotool", about = "Bijoy ↔ Unicode Bengali converter")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum TableDirection {
    LegacyToUnicode,
    UnicodeToLegacy,
}

impl From<TableDirection> for Direction {
    fn from(d: TableDirection) -> Self {
        match d {
            TableDirection::LegacyToUnicode => Direction::LegacyToUnicode,
            TableDirection::UnicodeToLegacy => Direction::UnicodeToLegacy,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Convert Bijoy glyph text to Unicode Bengali
    ToUnicode {
        /// Text to convert (default: --input or stdin)
        #[arg(conflicts_with = "input")]
        text: Option<String>,
        /// Input file
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
        /// Custom legacy→Unicode table (TOML)
        #[arg(long)]
        table: Option<String>,
    },
    /// Convert Unicode Bengali to Bijoy glyph text
    ToLegacy {
        /// Text to convert (default: --input or stdin)
        #[arg(conflicts_with = "input")]
        text: Option<String>,
        /// Input file
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
        /// Custom Unicode→legacy table (TOML)
        #[arg(long)]
        table: Option<String>,
    },
    /// Show the class of each character in Unicode Bengali text
    Classify {
        text: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export a default glyph table as TOML
    TableExport {
        #[arg(long, value_enum)]
        direction: TableDirection,
    },
    /// Validate a custom glyph table TOML file
    TableValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::ToUnicode {
            text,
            input,
            output,
            table,
        } => convert_ops::to_unicode_cmd(
            text.as_deref(),
            input.as_deref(),
            output.as_deref(),
            table.as_deref(),
        ),
        Command::ToLegacy {
            text,
            input,
            output,
            table,
        } => convert_ops::to_legacy_cmd(
            text.as_deref(),
            input.as_deref(),
            output.as_deref(),
            table.as_deref(),
        ),
        Command::Classify { text, json } => classify_ops::classify_cmd(&text, json),
        Command::TableExport { direction } => table_ops::table_export(direction.into()),
        Command::TableValidate { file } => table_ops::table_validate(&file),
    }
}
