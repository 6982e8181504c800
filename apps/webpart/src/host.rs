//! File-backed stand-in for the page that hosts the web part: owns the
//! property bag, accepts commits, writes them back to disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use shared::domain::DisplayMode;
use tracing::info;
use view_core::{Commit, WebPartProperties};

pub struct WebPartHost {
    path: PathBuf,
    properties: WebPartProperties,
    display_mode: DisplayMode,
}

impl WebPartHost {
    /// Reads the property bag at `path`; a missing file starts from defaults.
    pub fn load(path: impl Into<PathBuf>, display_mode: DisplayMode) -> Result<Self> {
        let path = path.into();
        let properties = if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read properties '{}'", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse properties '{}'", path.display()))?
        } else {
            info!(path = %path.display(), "no properties file yet; starting empty");
            WebPartProperties::default()
        };

        Ok(Self {
            path,
            properties,
            display_mode,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn properties(&self) -> &WebPartProperties {
        &self.properties
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Takes ownership of a replacement collection and persists it.
    pub fn commit(&mut self, commit: Commit) -> Result<()> {
        info!(reason = ?commit.reason, sections = commit.sections.len(), "committing sections");
        self.properties.sections.replace_all(commit.into_sections());
        self.persist()
    }

    pub fn set_property(&mut self, property: &str, value: &str) -> Result<()> {
        self.properties.apply_change(property, value)?;
        info!(property, value, "property changed");
        self.persist()
    }

    pub fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create parent directory '{}'", parent.display())
            })?;
        }
        let json = serde_json::to_string_pretty(&self.properties)?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write properties '{}'", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/host_tests.rs"]
mod tests;
