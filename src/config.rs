// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! User configuration stored as JSON under the config directory

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PuzzleError, Result};
use crate::missing::{MissingNumberFinder, Validation};

/// Output style for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Persistent CLI preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Validation mode used by `missing` unless `--strict` is passed
    pub validation: Validation,
    /// Default output format unless `--json` is passed
    pub format: OutputFormat,
}

impl PuzzleConfig {
    /// Default location: `~/.config/numpuzzle/config.json`
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "windows") {
            dirs::config_dir().map(|p| p.join("numpuzzle"))
        } else {
            dirs::home_dir().map(|p| p.join(".config/numpuzzle"))
        };

        config_dir
            .map(|p| p.join("config.json"))
            .ok_or(PuzzleError::ConfigNotFound)
    }

    /// Resolve an explicit path or fall back to the default location
    pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(p.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load config, using defaults when the file does not exist
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = Self::resolve_path(path)?;

        if config_path.exists() {
            log::debug!("loading config from {}", config_path.display());
            let content = fs::read_to_string(&config_path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            log::debug!("no config at {}, using defaults", config_path.display());
            Ok(Self::default())
        }
    }

    /// Save config, creating the parent directory if needed
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let config_path = Self::resolve_path(path)?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content)?;

        Ok(config_path)
    }

    pub fn finder(&self) -> MissingNumberFinder {
        MissingNumberFinder::new(self.validation)
    }
}
