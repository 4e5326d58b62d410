use clap::Args;
use std::path::PathBuf;

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Only log errors
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log pipeline stages
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Settings file to use instead of the standard search
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
