mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "capimg")]
#[command(about = "Capimg - Read and write JPEG XMP descriptions", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read the XMP description embedded in a JPEG
    Read {
        /// Input JPEG file
        input: String,

        /// Print the raw XMP packet instead of the extracted description
        #[arg(long)]
        raw: bool,
    },

    /// Write an XMP description into a JPEG
    Write {
        /// Input JPEG file (rewritten in place unless --output is given)
        input: String,

        /// The description text to embed
        description: String,

        /// Write the result here instead of replacing the input
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Remove all XMP segments from a JPEG
    Strip {
        /// Input JPEG file (rewritten in place unless --output is given)
        input: String,

        /// Write the result here instead of replacing the input
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List the marker segments of a JPEG
    Inspect {
        /// Input JPEG file
        input: String,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Write JSON output to a file
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Read { input, raw } => commands::read::execute(&input, raw),

        Commands::Write {
            input,
            description,
            output,
        } => commands::write::execute(&input, &description, output.as_deref()),

        Commands::Strip { input, output } => commands::strip::execute(&input, output.as_deref()),

        Commands::Inspect {
            input,
            json,
            output,
        } => commands::inspect::execute(&input, json, output.as_deref()),
    }
}
