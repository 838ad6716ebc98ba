//! Configuration management.
//!
//! Settings live in a JSON file under the platform data directory. The
//! location list is ordered: report subtotals iterate it as declared, so
//! every configured location shows up in output even with zero presence.
//! A missing file reads as the default configuration, which keeps first-run
//! commands working before `init` was ever called.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

fn default_user_id() -> i64 {
    1
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Known locations in display order.
    #[serde(default)]
    pub locations: Vec<String>,
    /// User id assumed when a command does not name one.
    #[serde(default = "default_user_id")]
    pub default_user: i64,
    /// Optional display name shown in greetings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            locations: Vec::new(),
            default_user: default_user_id(),
            display_name: None,
        }
    }
}

impl Config {
    /// Reads the configuration, falling back to the default when the file
    /// does not exist yet.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        if !path.exists() {
            return Ok(Config::default());
        }
        let config = serde_json::from_reader(File::open(path)?)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Interactive configuration wizard.
    pub fn init() -> Result<Self> {
        let current = Config::read()?;
        let theme = ColorfulTheme::default();

        let locations: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptLocations.to_string())
            .with_initial_text(current.locations.join(", "))
            .allow_empty(true)
            .interact_text()?;
        let default_user: i64 = Input::with_theme(&theme)
            .with_prompt(Message::PromptDefaultUser.to_string())
            .default(current.default_user)
            .interact_text()?;
        let display_name: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptDisplayName.to_string())
            .with_initial_text(current.display_name.unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        Ok(Config {
            locations: locations
                .split(',')
                .map(|location| location.trim().to_string())
                .filter(|location| !location.is_empty())
                .collect(),
            default_user,
            display_name: if display_name.trim().is_empty() {
                None
            } else {
                Some(display_name.trim().to_string())
            },
        })
    }
}
