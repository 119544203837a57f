use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for ballot-cli
#[derive(Debug, Parser)]
#[command(
    name = "ballot",
    version,
    about = "Look up what is on the ballot for a county, state or zip code"
)]
pub struct CliArgs {
    /// Path to the zip lookup table (.csv or .json, optionally .gz)
    #[arg(short = 'l', long = "lookup", env = "BALLOT_LOOKUP", global = true)]
    pub lookup: Option<PathBuf>,

    /// Path to the ballot table (.csv or .json, optionally .gz)
    #[arg(short = 'b', long = "ballots", env = "BALLOT_DATA", global = true)]
    pub ballots: Option<PathBuf>,

    /// Compiled store written by `build`; takes precedence over --lookup/--ballots
    #[arg(short = 's', long = "store", global = true)]
    pub store: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the loaded dataset
    Stats,

    /// Print example queries
    Examples,

    /// Search ballots by "County, State (Zip)", zip, county, state or district
    Search {
        /// Query text; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Render ballot markdown as HTML
        #[arg(long)]
        html: bool,
    },

    /// Show autocomplete suggestions for partial input
    Suggest {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Maximum number of suggestions
        #[arg(short = 'n', long, default_value_t = ballot_core::config::DEFAULT_SUGGESTION_LIMIT)]
        limit: usize,
    },

    /// Show how a query splits into county, state and zip
    Parse {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Compile the lookup and ballot tables into a binary store
    Build {
        /// Output file
        #[arg(short = 'o', long)]
        out: PathBuf,
    },

    /// Drive the search box from stdin, one event per line
    ///
    /// Plain lines are typed text. `:down`, `:up` and `:enter` are keys,
    /// `:pick N` clicks the N-th suggestion, `:outside` / `:inside` are page
    /// clicks, `:search TEXT` searches directly and `:quit` stops.
    Interactive {
        /// Render ballot markdown as HTML
        #[arg(long)]
        html: bool,
    },
}
