// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Command implementations

mod config_cmds;
mod missing;
mod stairs;

pub use config_cmds::*;
pub use missing::*;
pub use stairs::*;

use crate::config::{OutputFormat, PuzzleConfig};

/// Per-invocation settings shared by command handlers
#[derive(Debug, Clone)]
pub struct Context {
    pub config: PuzzleConfig,
    pub config_path: Option<std::path::PathBuf>,
    pub json: bool,
}

impl Context {
    /// Whether output should be JSON, from `--json` or the config default
    pub fn wants_json(&self) -> bool {
        self.json || self.config.format == OutputFormat::Json
    }
}
