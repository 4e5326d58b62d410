mod args;
mod config;
mod global;
mod handlers;

use args::{DecodeArgs, DetectArgs, EncodeArgs, LoadArgs, PresetArgs, ShareArgs};
use clap::{Parser, Subcommand};
use global::GlobalArgs;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "phrase-share")]
#[command(version)]
#[command(about = "Build and load share codes for quick-phrase dialog packs", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn a JSON dialog list into a share code
    Share(ShareArgs),
    /// Turn a share code back into a JSON dialog list
    Load(LoadArgs),
    /// Print which codec a share code is written in
    Detect(DetectArgs),
    /// Encode raw bytes with one alphabet (no compression)
    Encode(EncodeArgs),
    /// Decode one alphabet back to raw bytes
    Decode(DecodeArgs),
    /// Manage locally stored presets
    Preset(PresetArgs),
}

/// Logs go to stderr so stdout only carries command output.
fn init_logging(global: &GlobalArgs) {
    let default_level = if global.verbose {
        "debug"
    } else if global.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.global);

    let settings = config::load_settings(cli.global.config.as_deref())?;

    match cli.command {
        Commands::Share(args) => handlers::share::handle(args, &settings),
        Commands::Load(args) => handlers::load::handle(args),
        Commands::Detect(args) => handlers::detect::handle(args),
        Commands::Encode(args) => handlers::encode::handle(args),
        Commands::Decode(args) => handlers::decode::handle(args),
        Commands::Preset(args) => handlers::preset::handle(args, &cli.global, &settings),
    }
}
