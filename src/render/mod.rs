//! Manifest form rendering
//!
//! [`FormRenderer`] turns property descriptors into table rows:
//! - `create_input` picks a text input, checkbox, or JSON textarea by declared type
//! - `build_row` wraps the input with a label cell, appends the row to a
//!   container, and records the property's default
//! - `collect_values` reads the rendered inputs back into typed JSON values

pub mod inputs;
pub mod row;
pub mod submission;
pub mod value;

use crate::config::FormSettings;

/// Renders manifest properties using the configured markup settings
#[derive(Debug, Clone, Default)]
pub struct FormRenderer {
    settings: FormSettings,
}

impl FormRenderer {
    pub fn new(settings: FormSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }
}
