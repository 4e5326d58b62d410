use phrase_share::{CodecKind, CodecNotFoundError, PresetStore, ShareSettings, find_closest_codec};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Loads settings from `--config` when given, otherwise from the standard
/// search path.
pub fn load_settings(config: Option<&Path>) -> Result<ShareSettings, Box<dyn std::error::Error>> {
    match config {
        Some(path) => ShareSettings::load_from_file(path)
            .map_err(|e| format!("Cannot load settings from '{}': {}", path.display(), e).into()),
        None => ShareSettings::load_with_overrides(),
    }
}

/// Helper function to resolve a codec name, suggesting a close match
pub fn resolve_codec(name: &str) -> Result<CodecKind, CodecNotFoundError> {
    CodecKind::from_str(name).map_err(|_| CodecNotFoundError::new(name, find_closest_codec(name)))
}

/// Reads raw input from a file or stdin.
pub fn read_input(file: Option<&PathBuf>) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        Ok(fs::read(file_path)?)
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        Ok(buffer)
    }
}

/// Reads UTF-8 text from a file or stdin.
pub fn read_text(file: Option<&PathBuf>) -> Result<String, Box<dyn std::error::Error>> {
    let data = read_input(file)?;
    Ok(String::from_utf8(data).map_err(|_| "Input is not valid UTF-8 text")?)
}

/// Writes bytes to a file, or to stdout.
pub fn write_output(output: Option<&PathBuf>, data: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(output_path) = output {
        fs::write(output_path, data)?;
    } else {
        io::stdout().write_all(data)?;
    }
    Ok(())
}

/// Writes a line of text to a file, or to stdout.
pub fn write_line(output: Option<&PathBuf>, text: &str) -> Result<(), Box<dyn std::error::Error>> {
    write_output(output, format!("{}\n", text).as_bytes())
}

/// Opens the preset store at `--store`, the configured path, or the
/// platform data directory.
pub fn open_store(
    store: Option<&str>,
    settings: &ShareSettings,
) -> Result<PresetStore, Box<dyn std::error::Error>> {
    let path = match store {
        Some(p) => PathBuf::from(shellexpand::tilde(p).into_owned()),
        None => settings
            .store_path()
            .ok_or("Cannot determine data directory; use --store")?,
    };
    let store = PresetStore::open(path)?;
    tracing::debug!(path = %store.path().display(), presets = store.presets().len(), "Opened preset store");
    Ok(store)
}
