use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vulnprep")]
#[command(version)]
#[command(about = "Prepare assessment snapshots for report rendering")]
pub struct Cli {
    /// Print debug output of every preparation stage
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// the command to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Prepare a fetched assessment snapshot (JSON) for rendering
    Prepare {
        /// Path to the snapshot file: {customer, assessment, vulnerabilities}
        #[arg(short, long)]
        snapshot: String,

        /// Palette file (JSON) overriding the default severity colors
        #[arg(short, long)]
        palette: Option<String>,

        /// Write the prepared report data as JSON to this file instead of
        /// printing a summary
        #[arg(short, long)]
        output: Option<String>,

        /// IANA timezone the delivery date is shown in (e.g. Europe/Rome)
        #[arg(short, long)]
        timezone: Option<String>,

        /// Delivery date style: US, EU, ISO, YMD, DMY or MDY. Inferred from
        /// the timezone when omitted
        #[arg(long)]
        date_style: Option<String>,
    },

    /// Print the default color palette as JSON
    Palette {},
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
