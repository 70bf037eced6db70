use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "castpath")]
#[command(version, about = "Find how and when two actors are connected through shared movies")]
pub struct Cli {
    /// Verbose logging (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode - no terminal summary
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print the run summary as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone)]
pub enum Command {
    /// Shortest path between each pair of actors
    Path(PathArgs),

    /// Year each pair of actors first became connected
    Connections(ConnectionArgs),
}

#[derive(clap::Args, Clone)]
pub struct PathArgs {
    /// Movie casts file (actor, title, year; tab separated, with header)
    pub casts: PathBuf,

    /// u for unweighted hops, w for year-weighted edges
    #[arg(value_parser = ["u", "w"])]
    pub weights: String,

    /// Actor pairs file (two names per line, tab separated, with header)
    pub pairs: PathBuf,

    /// Output file for the paths
    pub output: PathBuf,

    /// Year weights are measured from
    #[arg(long, value_name = "YEAR", default_value_t = castpath_core::DEFAULT_REFERENCE_YEAR)]
    pub reference_year: i32,
}

#[derive(clap::Args, Clone)]
pub struct ConnectionArgs {
    /// Movie casts file (actor, title, year; tab separated, with header)
    pub casts: PathBuf,

    /// Actor pairs file (two names per line, tab separated, with header)
    pub pairs: PathBuf,

    /// Output file for the connection years
    pub output: PathBuf,

    /// Algorithm used to detect the first connection
    #[arg(value_parser = ["ufind", "bfs"], default_value = "ufind")]
    pub algorithm: String,
}
