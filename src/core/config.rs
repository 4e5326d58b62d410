use serde::Deserialize;
use std::fmt;

/// The alphabet a share code is written in.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum CodecKind {
    /// 3-bit bit-packing over eight block glyphs.
    #[default]
    Blocky,
    /// Two arrow glyphs per byte.
    Arrow,
    /// Two Sinhala clusters per byte. Decode-only in the share dialog.
    Sussy,
    /// RFC 4648 base64.
    #[serde(alias = "base64")]
    Standard,
}

impl CodecKind {
    /// Every codec, in sniffing order.
    pub const ALL: [CodecKind; 4] = [
        CodecKind::Blocky,
        CodecKind::Arrow,
        CodecKind::Sussy,
        CodecKind::Standard,
    ];

    /// Codecs offered as export choices.
    pub const EXPORTABLE: [CodecKind; 3] = [CodecKind::Blocky, CodecKind::Arrow, CodecKind::Standard];

    /// Parse codec name from string.
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "blocky" | "block" => Ok(CodecKind::Blocky),
            "arrow" | "arrows" => Ok(CodecKind::Arrow),
            "sussy" | "sus" => Ok(CodecKind::Sussy),
            "standard" | "base64" | "b64" => Ok(CodecKind::Standard),
            _ => Err(format!("Unknown codec: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CodecKind::Blocky => "blocky",
            CodecKind::Arrow => "arrow",
            CodecKind::Sussy => "sussy",
            CodecKind::Standard => "standard",
        }
    }

    /// Human-readable label, as shown on the export buttons.
    pub fn label(&self) -> &'static str {
        match self {
            CodecKind::Blocky => "Blocky Code",
            CodecKind::Arrow => "Arrow Code",
            CodecKind::Sussy => "Sussy Code",
            CodecKind::Standard => "Standard (Base64)",
        }
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_compression_level() -> u32 {
    6
}

/// User-facing share settings loaded from TOML.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ShareSettings {
    /// Codec used when none is given explicitly
    #[serde(default)]
    pub default_codec: CodecKind,
    /// gzip level, 0-9
    #[serde(default = "default_compression_level")]
    pub compression_level: u32,
    /// Location of the preset store; platform data dir when unset
    #[serde(default)]
    pub store_path: Option<String>,
}

impl Default for ShareSettings {
    fn default() -> Self {
        ShareSettings {
            default_codec: CodecKind::default(),
            compression_level: default_compression_level(),
            store_path: None,
        }
    }
}

/// Partial settings as found in an override file. Unset keys keep the
/// value from the layer below.
#[derive(Debug, Clone, Default, Deserialize)]
struct SettingsOverride {
    default_codec: Option<CodecKind>,
    compression_level: Option<u32>,
    store_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SettingsFile<T> {
    share: T,
}

impl ShareSettings {
    /// Parses settings from TOML content with a `[share]` table.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let file: SettingsFile<ShareSettings> = toml::from_str(content)?;
        Ok(file.share)
    }

    /// Loads the built-in settings bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../share.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads settings from a custom file path, filling unset keys from the
    /// built-in defaults.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings = Self::load_default()?;
        settings.merge_file(path)?;
        Ok(settings)
    }

    /// Loads settings with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in settings (from library)
    /// 2. `~/.config/phrase-share/share.toml` (user overrides)
    /// 3. `./share.toml` (project-local overrides)
    ///
    /// Later files override earlier ones key by key. A file that fails to
    /// parse is skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_path = config_dir.join("phrase-share").join("share.toml");
            if user_path.exists() {
                if let Err(e) = settings.merge_file(&user_path) {
                    tracing::warn!(path = %user_path.display(), error = %e, "Failed to load user settings");
                }
            }
        }

        let local_path = std::path::Path::new("share.toml");
        if local_path.exists() {
            if let Err(e) = settings.merge_file(local_path) {
                tracing::warn!(path = %local_path.display(), error = %e, "Failed to load local settings");
            }
        }

        Ok(settings)
    }

    fn merge_file(&mut self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let file: SettingsFile<SettingsOverride> = toml::from_str(&content)?;
        self.merge(file.share);
        Ok(())
    }

    fn merge(&mut self, other: SettingsOverride) {
        if let Some(codec) = other.default_codec {
            self.default_codec = codec;
        }
        if let Some(level) = other.compression_level {
            self.compression_level = level.min(9);
        }
        if other.store_path.is_some() {
            self.store_path = other.store_path;
        }
    }

    /// Resolved preset store location, with `~` expanded.
    pub fn store_path(&self) -> Option<std::path::PathBuf> {
        self.store_path
            .as_deref()
            .map(|p| std::path::PathBuf::from(shellexpand::tilde(p).into_owned()))
            .or_else(|| dirs::data_dir().map(|d| d.join("phrase-share").join("presets.json")))
    }
}
