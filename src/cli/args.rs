use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Arguments for building a share code
#[derive(Args, Debug)]
pub struct ShareArgs {
    /// Codec to write the code in (default from settings)
    #[arg(short = 'c', long)]
    pub codec: Option<String>,

    /// JSON dialog list (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for loading a share code
#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Share code file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short = 'p', long)]
    pub pretty: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for sniffing a share code
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,
}

/// Arguments for raw alphabet encoding
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Codec to encode with
    #[arg(short = 'c', long)]
    pub codec: String,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for raw alphabet decoding
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Codec to decode from (sniffed when omitted)
    #[arg(short = 'c', long)]
    pub codec: Option<String>,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the preset store
#[derive(Args, Debug)]
pub struct PresetArgs {
    #[command(subcommand)]
    pub action: PresetAction,

    /// Preset store file (default from settings)
    #[arg(long, value_name = "PATH")]
    pub store: Option<String>,
}

/// Preset subcommand actions
#[derive(Subcommand, Debug)]
pub enum PresetAction {
    /// List presets, marking the active one
    List,

    /// Print a share code for the active preset
    Export {
        /// Codec to write the code in (default from settings)
        #[arg(short = 'c', long)]
        codec: Option<String>,
    },

    /// Replace the active preset's dialogs from a share code
    Import {
        /// Share code file (reads from stdin if not provided)
        file: Option<PathBuf>,
    },

    /// Restore the active preset from its built-in template
    Reset,

    /// Make a preset active by id or name
    Select {
        /// Preset id or name
        preset: String,
    },

    /// Create a new preset and make it active
    Add {
        /// Preset name
        name: String,
    },

    /// Delete a preset by id
    Delete {
        /// Preset id
        id: String,
    },
}
