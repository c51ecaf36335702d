// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Arena configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! budget = "64M"
//! reuse_storage = true
//! ```

use crate::{AllocBudget, ArenaError};
use std::path::Path;

/// Configuration for a [`crate::BufferArena`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ArenaConfig {
    /// Live-byte ceiling (human-readable, e.g., `"64M"`).
    pub budget: String,
    /// Whether released storage is kept for reuse.
    #[serde(default = "default_true")]
    pub reuse_storage: bool,
}

fn default_true() -> bool {
    true
}

impl ArenaConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ArenaError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ArenaError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ArenaError> {
        toml::from_str(toml_str).map_err(|e| ArenaError::Config(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, ArenaError> {
        toml::to_string_pretty(self)
            .map_err(|e| ArenaError::Config(format!("TOML serialise error: {e}")))
    }

    /// Parses the budget string into an [`AllocBudget`].
    pub fn parse_budget(&self) -> Result<AllocBudget, ArenaError> {
        AllocBudget::parse(&self.budget)
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            budget: "256M".to_string(),
            reuse_storage: true,
        }
    }
}
