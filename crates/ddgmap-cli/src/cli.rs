use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "ddgmap - Position-list preparation and heat-map helpers for Rosetta Flex ddG / MutateX saturation-mutagenesis workflows.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filter a position list against available energy files, then invoke ddg2heatmap.
    Heatmap(HeatmapArgs),
    /// Generate a MutateX position list from a structure or a mutinfo log.
    Positions(PositionsArgs),
}

/// Arguments for the `heatmap` subcommand.
#[derive(Args, Debug, Default)]
pub struct HeatmapArgs {
    /// Path to the input PDB file passed through to ddg2heatmap.
    #[arg(short, long, value_name = "PATH")]
    pub pdb: Option<PathBuf>,

    /// Directory containing the per-position MutateX energy files.
    #[arg(short, long = "data-directory", value_name = "DIR")]
    pub data_directory: Option<PathBuf>,

    /// Mutation list file (single-letter residues) passed through to ddg2heatmap.
    #[arg(short = 'l', long = "mutation-list", value_name = "PATH")]
    pub mutation_list: Option<PathBuf>,

    /// Position list file to filter (e.g. entries like CA23).
    #[arg(short = 'q', long = "position-list", value_name = "PATH")]
    pub position_list: Option<PathBuf>,

    /// Output filename passed to ddg2heatmap.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a TOML file providing defaults for the options above.
    /// Values given on the command line take precedence.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep the filtered position list file instead of deleting it.
    #[arg(long)]
    pub keep_temp: bool,

    /// Extra arguments forwarded verbatim to ddg2heatmap (after `--`),
    /// e.g. `-- -c viridis -t`.
    #[arg(last = true, value_name = "ARGS")]
    pub extra: Vec<String>,
}

/// Arguments for the `positions` subcommand.
#[derive(Args, Debug)]
pub struct PositionsArgs {
    #[command(subcommand)]
    pub command: PositionsCommands,
}

/// Sources a position list can be generated from.
#[derive(Subcommand, Debug)]
pub enum PositionsCommands {
    /// Derive positions from a PDB structure and residue spans.
    Pdb {
        /// Input PDB file.
        #[arg(short, long, required = true, value_name = "PATH")]
        pdb: PathBuf,

        /// Residue spans to include, e.g. A:30-37 B:50-60.
        #[arg(short, long, required = true, num_args(1..), value_name = "CHAIN:START-END")]
        spans: Vec<String>,

        /// Output file name for the position list.
        #[arg(short, long, default_value = "position_list.txt", value_name = "PATH")]
        output: PathBuf,
    },
    /// Derive unique, sorted positions from a Flex ddG mutinfo log.
    Mutinfo {
        /// Path to the mutinfo file.
        #[arg(short, long, default_value = "flexddg/mutinfo.txt", value_name = "PATH")]
        mutinfo: PathBuf,

        /// Output file name for the position list.
        #[arg(short, long, default_value = "position_list.txt", value_name = "PATH")]
        output: PathBuf,
    },
}
