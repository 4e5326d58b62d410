//! Local preset persistence.
//!
//! The store file holds every preset plus the id of the active one. A file
//! that only holds a bare dialog list (the single-pack layout) is migrated
//! into one preset named "Default Pack".

use crate::core::config::CodecKind;
use crate::dialog::{DialogNode, Preset};
use crate::encoders::algorithms::errors::ShareError;
use crate::share::{build_share_code, load_dialogs};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Built-in packs, in display order.
const BUILTIN_PACKS: &str = include_str!("../packs/builtin.json");

#[derive(Debug, Deserialize)]
struct BuiltinPack {
    name: String,
    dialogs: Vec<DialogNode>,
}

fn builtin_packs() -> Vec<BuiltinPack> {
    match serde_json::from_str(BUILTIN_PACKS) {
        Ok(packs) => packs,
        Err(e) => {
            tracing::error!(error = %e, "Built-in packs failed to parse");
            Vec::new()
        }
    }
}

/// Fresh copies of every built-in pack with new ids.
pub fn default_presets() -> Vec<Preset> {
    builtin_packs()
        .into_iter()
        .map(|pack| Preset::new(pack.name, pack.dialogs))
        .collect()
}

/// Built-in dialogs for the pack whose name best matches `preset_name`.
///
/// Falls back to the first built-in pack (FPS) when no keyword matches.
pub fn template_for(preset_name: &str) -> Vec<DialogNode> {
    let name = preset_name.to_lowercase();
    let template = if name.contains("moba") {
        "MOBA Strategy"
    } else if name.contains("social") {
        "Social / Chill"
    } else if name.contains("battle royale") || name.contains("br") {
        "Battle Royale"
    } else if name.contains("mmo") {
        "MMO Raid"
    } else if name.contains("rts") {
        "RTS Macro"
    } else if name.contains("fighting") {
        "Fighting Games"
    } else if name.contains("tf2") || name.contains("fortress") {
        "Team Fortress 2"
    } else {
        "FPS Tactical"
    };

    let mut packs = builtin_packs();
    let index = packs.iter().position(|p| p.name == template).unwrap_or(0);
    if index < packs.len() {
        packs.swap_remove(index).dialogs
    } else {
        Vec::new()
    }
}

/// Errors raised by the preset store.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
    UnknownPreset(String),
    LastPreset,
    Share(ShareError),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "preset store I/O failed: {}", e),
            StoreError::Serialize(e) => write!(f, "preset store could not be written: {}", e),
            StoreError::UnknownPreset(id) => write!(f, "no preset with id '{}'", id),
            StoreError::LastPreset => write!(f, "cannot delete the last preset"),
            StoreError::Share(e) => f.write_str(&e.user_message()),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Serialize(e) => Some(e),
            StoreError::Share(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ShareError> for StoreError {
    fn from(e: ShareError) -> Self {
        StoreError::Share(e)
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreFile {
    presets: Vec<Preset>,
    #[serde(default)]
    active_preset_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredLayout {
    Presets(StoreFile),
    Legacy(Vec<DialogNode>),
}

/// Presets on disk plus the currently active one.
#[derive(Debug)]
pub struct PresetStore {
    path: PathBuf,
    presets: Vec<Preset>,
    active_preset_id: String,
}

impl PresetStore {
    /// Opens the store at `path`.
    ///
    /// A missing file yields the built-in packs. A file that cannot be
    /// parsed is logged and replaced in memory by a single FPS pack; it is
    /// not overwritten until [`PresetStore::save`] is called.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let (presets, active) = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(StoreError::Io)?;
            match serde_json::from_str::<StoredLayout>(&content) {
                Ok(StoredLayout::Presets(file)) => (file.presets, file.active_preset_id),
                Ok(StoredLayout::Legacy(dialogs)) => {
                    tracing::info!(path = %path.display(), "Migrating single-pack store");
                    (vec![Preset::new("Default Pack", dialogs)], String::new())
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to parse saved presets, using default");
                    (vec![Preset::new("FPS Tactical", template_for(""))], String::new())
                }
            }
        } else {
            (default_presets(), String::new())
        };

        Ok(Self::from_presets(path, presets, active))
    }

    fn from_presets(path: PathBuf, mut presets: Vec<Preset>, active: String) -> Self {
        if presets.is_empty() {
            presets.push(Preset::new("FPS Tactical", template_for("")));
        }
        let active_preset_id = if presets.iter().any(|p| p.id == active) {
            active
        } else {
            presets[0].id.clone()
        };

        PresetStore {
            path,
            presets,
            active_preset_id,
        }
    }

    /// Writes the store as pretty JSON, creating parent directories.
    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(StoreError::Io)?;
            }
        }
        let file = StoreFile {
            presets: self.presets.clone(),
            active_preset_id: self.active_preset_id.clone(),
        };
        let json = serde_json::to_string_pretty(&file).map_err(StoreError::Serialize)?;
        std::fs::write(&self.path, json).map_err(StoreError::Io)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn active(&self) -> &Preset {
        self.presets
            .iter()
            .find(|p| p.id == self.active_preset_id)
            .unwrap_or(&self.presets[0])
    }

    fn active_mut(&mut self) -> &mut Preset {
        let index = self
            .presets
            .iter()
            .position(|p| p.id == self.active_preset_id)
            .unwrap_or(0);
        &mut self.presets[index]
    }

    /// Makes the preset with `id` (or, failing that, a case-insensitive name
    /// match) the active one.
    pub fn select(&mut self, id_or_name: &str) -> Result<&Preset, StoreError> {
        let index = self
            .presets
            .iter()
            .position(|p| p.id == id_or_name)
            .or_else(|| {
                self.presets
                    .iter()
                    .position(|p| p.name.eq_ignore_ascii_case(id_or_name))
            })
            .ok_or_else(|| StoreError::UnknownPreset(id_or_name.to_string()))?;
        self.active_preset_id = self.presets[index].id.clone();
        Ok(&self.presets[index])
    }

    /// Adds an empty-ish preset with one starter category and selects it.
    pub fn add_preset(&mut self, name: &str) -> &Preset {
        let starter = DialogNode::category(
            uuid::Uuid::new_v4().to_string(),
            "1",
            "New Category",
            Vec::new(),
        );
        let preset = Preset::new(name, vec![starter]);
        self.active_preset_id = preset.id.clone();
        self.presets.push(preset);
        self.active()
    }

    /// Removes a preset. The last remaining preset cannot be removed.
    pub fn delete_preset(&mut self, id: &str) -> Result<Preset, StoreError> {
        if self.presets.len() <= 1 {
            return Err(StoreError::LastPreset);
        }
        let index = self
            .presets
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::UnknownPreset(id.to_string()))?;
        let removed = self.presets.remove(index);
        if self.active_preset_id == removed.id {
            self.active_preset_id = self.presets[0].id.clone();
        }
        Ok(removed)
    }

    /// Share code for the active preset's dialogs.
    pub fn export_active(&self, kind: CodecKind) -> Result<String, StoreError> {
        Ok(build_share_code(&self.active().dialogs, kind)?)
    }

    /// Replaces the active preset's dialogs with the contents of a share
    /// code. On any failure the store is left untouched.
    pub fn import_code(&mut self, code: &str) -> Result<&Preset, StoreError> {
        let dialogs = load_dialogs(code)?;
        let preset = self.active_mut();
        preset.dialogs = dialogs;
        tracing::info!(preset = %preset.name, "Dialogs loaded successfully");
        Ok(self.active())
    }

    /// Restores the active preset from the matching built-in template.
    pub fn reset_active(&mut self) -> &Preset {
        let preset = self.active_mut();
        preset.dialogs = template_for(&preset.name);
        self.active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_builtin_packs() {
        let dir = tempdir().unwrap();
        let store = PresetStore::open(dir.path().join("presets.json")).unwrap();
        assert_eq!(store.presets().len(), 8);
        assert_eq!(store.active().name, "FPS Tactical");
    }

    #[test]
    fn test_save_and_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("presets.json");
        let mut store = PresetStore::open(&path).unwrap();
        assert_eq!(store.path(), path.as_path());
        let id = store.select("MOBA Strategy").unwrap().id.clone();
        store.save().unwrap();

        let reopened = PresetStore::open(&path).unwrap();
        assert_eq!(reopened.active().id, id);
        assert_eq!(reopened.presets(), store.presets());
    }

    #[test]
    fn test_legacy_layout_migrates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("presets.json");
        std::fs::write(&path, r#"[{"id":"a","key":"1","text":"hi"}]"#).unwrap();

        let store = PresetStore::open(&path).unwrap();
        assert_eq!(store.presets().len(), 1);
        assert_eq!(store.active().name, "Default Pack");
        assert_eq!(store.active().dialogs[0].text, "hi");
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("presets.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = PresetStore::open(&path).unwrap();
        assert_eq!(store.presets().len(), 1);
        assert_eq!(store.active().name, "FPS Tactical");
        assert!(!store.active().dialogs.is_empty());
    }

    #[test]
    fn test_import_replaces_active_only() {
        let dir = tempdir().unwrap();
        let mut store = PresetStore::open(dir.path().join("p.json")).unwrap();
        let other_before = store.presets()[1].clone();

        let new_pack = vec![DialogNode::message("m", "1", "imported")];
        let code = build_share_code(&new_pack, CodecKind::Blocky).unwrap();
        store.import_code(&code).unwrap();

        assert_eq!(store.active().dialogs, new_pack);
        assert_eq!(store.presets()[1], other_before);
    }

    #[test]
    fn test_failed_import_leaves_store_untouched() {
        let dir = tempdir().unwrap();
        let mut store = PresetStore::open(dir.path().join("p.json")).unwrap();
        let before = store.presets().to_vec();

        for bad in ["", "   ", "not a code", "▀▄█▌▐░▒▓", "Zg="] {
            assert!(store.import_code(bad).is_err(), "{:?}", bad);
        }
        assert_eq!(store.presets(), before.as_slice());
    }

    #[test]
    fn test_export_active_roundtrips() {
        let dir = tempdir().unwrap();
        let store = PresetStore::open(dir.path().join("p.json")).unwrap();
        let code = store.export_active(CodecKind::Arrow).unwrap();
        assert_eq!(load_dialogs(&code).unwrap(), store.active().dialogs);
    }

    #[test]
    fn test_reset_uses_name_keyword() {
        let dir = tempdir().unwrap();
        let mut store = PresetStore::open(dir.path().join("p.json")).unwrap();
        store.add_preset("My TF2 binds");
        assert_eq!(store.active().dialogs.len(), 1);

        store.reset_active();
        assert_eq!(store.active().dialogs, template_for("Team Fortress 2"));
        assert_ne!(store.active().dialogs, template_for(""));
    }

    #[test]
    fn test_delete_rules() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("p.json");
        std::fs::write(&path, r#"[{"id":"a","key":"1","text":"hi"}]"#).unwrap();
        let mut store = PresetStore::open(&path).unwrap();
        let only = store.active().id.clone();
        assert!(matches!(store.delete_preset(&only), Err(StoreError::LastPreset)));

        let added = store.add_preset("Extra").id.clone();
        store.delete_preset(&added).unwrap();
        assert_eq!(store.active().id, only);
        assert!(matches!(
            store.delete_preset("nope"),
            Err(StoreError::LastPreset)
        ));
    }

    #[test]
    fn test_select_unknown() {
        let dir = tempdir().unwrap();
        let mut store = PresetStore::open(dir.path().join("p.json")).unwrap();
        assert!(matches!(
            store.select("no such pack"),
            Err(StoreError::UnknownPreset(_))
        ));
    }
}
