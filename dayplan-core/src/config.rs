//! Global dayplan configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};
use crate::surface::CalendarOptions;

fn default_drag_edit() -> bool {
    true
}

fn is_true(b: &bool) -> bool {
    *b
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Which day the month grid starts its weeks on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstWeekday {
    #[default]
    Sunday,
    Monday,
}

/// Global configuration at ~/.config/dayplan/config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Start each run with the two sample entries instead of empty
    #[serde(default, skip_serializing_if = "is_false")]
    pub seed_samples: bool,

    /// Allow entries to be dragged to other days
    #[serde(default = "default_drag_edit", skip_serializing_if = "is_true")]
    pub drag_edit: bool,

    #[serde(default)]
    pub first_weekday: FirstWeekday,
}

impl Default for PlanConfig {
    fn default() -> Self {
        PlanConfig {
            seed_samples: false,
            drag_edit: true,
            first_weekday: FirstWeekday::Sunday,
        }
    }
}

impl PlanConfig {
    pub fn config_path() -> PlanResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PlanError::Config("Could not determine config directory".into()))?
            .join("dayplan");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> PlanResult<PlanConfig> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| PlanError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PlanError::Config(e.to_string()))
    }

    /// Save the current config to ~/.config/dayplan/config.toml
    pub fn save(&self) -> PlanResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| PlanError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| PlanError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> PlanResult<()> {
        let contents = "\
# dayplan configuration

# Start each run with the two sample entries:
# seed_samples = true

# Allow dragging entries to other days:
# drag_edit = false

# First day of the week in the month grid (\"sunday\" or \"monday\"):
# first_weekday = \"monday\"
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| PlanError::Config(format!("Could not create config directory: {e}")))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| PlanError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Interaction switches for a calendar surface, per this config.
    pub fn calendar_options(&self) -> CalendarOptions {
        CalendarOptions {
            editable: self.drag_edit,
            droppable: self.drag_edit,
        }
    }
}
