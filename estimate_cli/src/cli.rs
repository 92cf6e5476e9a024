//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "orcaobra")]
#[command(about = "Construction material estimates from site measurements", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List calculators, optionally only those offered to a niche.
    List {
        /// Company niche, e.g. "Alvenaria" or "Gesso e Drywall"
        #[arg(short, long)]
        niche: Option<String>,
    },
    /// Run one calculator.
    Run(RunArgs),
    /// Show tips and FAQs for a calculator.
    Guide {
        /// Calculator id or alias (e.g. drywall-parede, stairs)
        calculator: String,
    },
    /// Stock valuation of a catalog: total cost, total sale, profit and margin.
    Summary {
        /// Material catalog file (JSON)
        #[arg(long)]
        catalog: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Dimensions are taken as text and parsed leniently ("2,70", "4m").
#[derive(Args)]
pub struct RunArgs {
    /// Calculator id or alias
    pub calculator: String,

    #[arg(short = 'w', long, default_value = "")]
    pub width: String,

    #[arg(short = 'H', long, default_value = "")]
    pub height: String,

    #[arg(short, long, default_value = "")]
    pub depth: String,

    /// Safety margin in percent (0-20)
    #[arg(short, long, default_value = "10")]
    pub margin: String,

    /// Material catalog file (JSON)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Constants override file (TOML)
    #[arg(long)]
    pub constants: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}
