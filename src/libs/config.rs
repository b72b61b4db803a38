//! Configuration management for the taskdeck application.
//!
//! Handles the connection settings for the remote task service and their
//! persistence across sessions. Configuration is stored as JSON in the
//! platform-specific application data directory and can be created or
//! updated through an interactive setup wizard.
//!
//! ## Storage
//!
//! - **Windows**: `%LOCALAPPDATA%\taskdeck\config.json`
//! - **macOS**: `~/Library/Application Support/taskdeck/config.json`
//! - **Linux**: `~/.local/share/taskdeck/config.json`
//!
//! A missing configuration file is not an error: `read()` falls back to a
//! default configuration with no server section, and commands that need a
//! server connection surface a hint to run `taskdeck init`.
//!
//! ## Identity
//!
//! The service authenticates requests through a fixed `X-User-Id` header
//! rather than per-session tokens, so the configuration carries the user id
//! verbatim. No credentials are stored.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Remote task service connection settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the task service API.
    ///
    /// The resource paths (`folders/tree`, `tasks/...`) are appended to
    /// this base when requests are built.
    ///
    /// Example: `https://tasks.example.com/api`
    pub api_url: String,

    /// User id sent with every request as the identity header.
    pub user_id: String,
}

/// Main configuration container for the application.
///
/// The server section is optional so the binary can run (help, init)
/// before any setup has happened; `skip_serializing_if` keeps an
/// unconfigured file clean.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Task service connection settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl Config {
    /// Reads configuration from the filesystem, falling back to the
    /// default (empty) configuration when no file exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration setup.
    ///
    /// Existing values are offered as defaults so re-running the wizard
    /// only updates what the user changes.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let default = config.server.clone().unwrap_or(ServerConfig {
            api_url: "".to_string(),
            user_id: "".to_string(),
        });
        msg_print!(Message::ConfigModuleServer);
        config.server = Some(ServerConfig {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServerApiUrl.to_string())
                .default(default.api_url)
                .interact_text()?,
            user_id: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServerUserId.to_string())
                .default(default.user_id)
                .interact_text()?,
        });

        Ok(config)
    }

    /// Returns the server section or fails with a setup hint.
    pub fn require_server(&self) -> Result<&ServerConfig> {
        self.server.as_ref().ok_or_else(|| msg_error_anyhow!(Message::ConfigNotInitialized))
    }
}
