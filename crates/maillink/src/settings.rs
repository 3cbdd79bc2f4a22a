//! Settings for the app picker and desktop probing
//!
//! Both files live in the maillink config directory:
//! - `prompt.json` overrides the default picker text
//! - `installed.json` lists the apps a desktop shell should treat as installed

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::apps::AppId;

/// Prompt defaults filename in the maillink config directory
const PROMPT_FILE: &str = "prompt.json";

/// Installed apps filename in the maillink config directory
const INSTALLED_FILE: &str = "installed.json";

/// Picker text used when the caller leaves a field unset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PromptDefaults {
    pub title: String,
    pub message: String,
    pub cancel_label: String,
}

impl Default for PromptDefaults {
    fn default() -> Self {
        Self {
            title: "Open mail app".to_string(),
            message: "Which app would you like to open?".to_string(),
            cancel_label: "Cancel".to_string(),
        }
    }
}

impl PromptDefaults {
    /// Load ~/.config/maillink/prompt.json, falling back to built-in text
    pub fn load() -> Result<Self> {
        if config::config_exists(PROMPT_FILE) {
            return config::load_json(PROMPT_FILE);
        }
        Ok(Self::default())
    }

    /// Load prompt defaults from a specific JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        config::load_json_file(path)
    }

    /// Parse prompt defaults from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse prompt defaults JSON")
    }

    /// Get the default prompt file path (~/.config/maillink/prompt.json)
    pub fn default_path() -> Option<PathBuf> {
        config::config_path(PROMPT_FILE)
    }
}

/// Apps a desktop shell reports as installed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledApps {
    pub apps: Vec<AppId>,
}

impl InstalledApps {
    /// Load ~/.config/maillink/installed.json, or an empty list if absent
    pub fn load() -> Result<Self> {
        if config::config_exists(INSTALLED_FILE) {
            return config::load_json(INSTALLED_FILE);
        }
        Ok(Self::default())
    }

    /// Load the installed list from a specific JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        config::load_json_file(path)
    }

    /// Write the list to ~/.config/maillink/installed.json
    pub fn save(&self) -> Result<PathBuf> {
        config::save_json(INSTALLED_FILE, self)
    }
}
