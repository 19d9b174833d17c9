use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod validator;

use crate::cli::Cli;

pub const DEFAULT_CONFIG_FILE: &str = "manifest-gui.toml";
pub const DEFAULT_CONTAINER_ID: &str = "manifest-gui-body";
pub const DEFAULT_INPUT_CLASS: &str = "config-input";
pub const DEFAULT_HEADER_CELL_CLASS: &str = "table-data-header";
pub const DEFAULT_VALUE_CELL_CLASS: &str = "table-data-value";
pub const DEFAULT_TEXTAREA_ROWS: u32 = 5;
pub const DEFAULT_TEXTAREA_COLS: u32 = 50;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub form: FormSettings,
}

/// Markup settings for the rendered form
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FormSettings {
    /// Id of the element rows are appended to
    #[serde(default = "default_container_id")]
    pub container_id: String,
    /// Class shared by every generated input
    #[serde(default = "default_input_class")]
    pub input_class: String,
    #[serde(default = "default_header_cell_class")]
    pub header_cell_class: String,
    #[serde(default = "default_value_cell_class")]
    pub value_cell_class: String,
    #[serde(default = "default_textarea_rows")]
    pub textarea_rows: u32,
    #[serde(default = "default_textarea_cols")]
    pub textarea_cols: u32,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            container_id: default_container_id(),
            input_class: default_input_class(),
            header_cell_class: default_header_cell_class(),
            value_cell_class: default_value_cell_class(),
            textarea_rows: default_textarea_rows(),
            textarea_cols: default_textarea_cols(),
        }
    }
}

fn default_container_id() -> String {
    DEFAULT_CONTAINER_ID.to_string()
}

fn default_input_class() -> String {
    DEFAULT_INPUT_CLASS.to_string()
}

fn default_header_cell_class() -> String {
    DEFAULT_HEADER_CELL_CLASS.to_string()
}

fn default_value_cell_class() -> String {
    DEFAULT_VALUE_CELL_CLASS.to_string()
}

fn default_textarea_rows() -> u32 {
    DEFAULT_TEXTAREA_ROWS
}

fn default_textarea_cols() -> u32 {
    DEFAULT_TEXTAREA_COLS
}

impl Settings {
    /// Create settings from CLI arguments (config file, then CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let mut settings = Self::load(&cli.config)?;

        // CLI > env vars > config file > defaults
        settings.apply_cli_overrides(cli);

        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let settings = Self::load(path.as_ref())?;
        settings.validate()?;
        Ok(settings)
    }

    fn load(path: &Path) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .add_source(File::from(path).required(false))
            .set_default("form.container_id", DEFAULT_CONTAINER_ID)?
            .set_default("form.input_class", DEFAULT_INPUT_CLASS)?
            .set_default("form.header_cell_class", DEFAULT_HEADER_CELL_CLASS)?
            .set_default("form.value_cell_class", DEFAULT_VALUE_CELL_CLASS)?
            .set_default("form.textarea_rows", DEFAULT_TEXTAREA_ROWS as i64)?
            .set_default("form.textarea_cols", DEFAULT_TEXTAREA_COLS as i64)?
            .build()?;

        let settings: Settings = s.try_deserialize()?;
        Ok(settings)
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(container_id) = &cli.container_id {
            self.form.container_id = container_id.clone();
        }
        if let Some(input_class) = &cli.input_class {
            self.form.input_class = input_class.clone();
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate_settings(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }
}
