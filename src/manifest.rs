//! Icon section of a browser extension manifest
//!
//! Mirrors the `icons` and `action.default_icon` keys of an extension's
//! `manifest.json`, so the generated block icons can be pasted in as is.

use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

/// File name the fragment is written under, next to the icons
pub const MANIFEST_FILE: &str = "icons.json";

/// Icon paths keyed by pixel size
///
/// Integer keys keep the numeric order (16, 48, 128) and serialize as the
/// string keys the manifest format expects.
pub type IconMap = BTreeMap<u32, String>;

/// Root of the `icons.json` fragment
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct IconsManifest {
    /// Icons shown on the extensions page and in the store
    pub icons: IconMap,

    /// Toolbar button settings
    pub action: Action,
}

/// Toolbar button of the extension
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Action {
    pub default_icon: IconMap,
}

impl IconsManifest {
    /// Build a fragment listing every `(size, file name)` pair in both keys
    pub fn from_icons<I>(icons: I) -> Self
    where
        I: IntoIterator<Item = (u32, String)>,
    {
        let mut manifest = Self::default();
        for (size, file_name) in icons {
            manifest.add_icon(size, file_name);
        }
        manifest
    }

    pub fn add_icon(&mut self, size: u32, file_name: String) {
        self.action.default_icon.insert(size, file_name.clone());
        self.icons.insert(size, file_name);
    }

    /// Writes `icons.json` into `dir`, returning its path
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(MANIFEST_FILE);
        let json = serde_json::to_string_pretty(self).context("Failed to serialize icons.json")?;
        std::fs::write(&path, json).context("Failed to write icons.json file")?;
        Ok(path)
    }
}
