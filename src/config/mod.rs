use crate::core::duration::CustomDraft;
use crate::errors::{AppError, AppResult};
use crate::models::duration::{DurationUnit, DurationValue};
use crate::ui::layout::LayoutConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys written by `init`; `config --check` reports any the file lacks.
pub const KNOWN_KEYS: [&str; 6] = [
    "default_custom_value",
    "default_custom_unit",
    "narrow_breakpoint",
    "compact_presets",
    "terminal_width",
    "log_filter",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Value the custom duration input starts from.
    #[serde(default = "default_custom_value")]
    pub default_custom_value: i64,
    #[serde(default = "default_custom_unit")]
    pub default_custom_unit: DurationUnit,
    /// Terminal widths below this render the narrow layout.
    #[serde(default = "default_narrow_breakpoint")]
    pub narrow_breakpoint: u16,
    #[serde(default = "default_compact_presets")]
    pub compact_presets: bool,
    /// Width assumed when `--width` is not given.
    #[serde(default = "default_terminal_width")]
    pub terminal_width: u16,
    /// `tracing` filter used when RXFORM_LOG is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_custom_value() -> i64 {
    1
}
fn default_custom_unit() -> DurationUnit {
    DurationUnit::Weeks
}
fn default_narrow_breakpoint() -> u16 {
    80
}
fn default_compact_presets() -> bool {
    true
}
fn default_terminal_width() -> u16 {
    100
}
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_custom_value: default_custom_value(),
            default_custom_unit: default_custom_unit(),
            narrow_breakpoint: default_narrow_breakpoint(),
            compact_presets: default_compact_presets(),
            terminal_width: default_terminal_width(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// `~/.rxform`, or the working directory when no home is known.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rxform")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rxform.conf")
    }

    /// Resolves the file to use: the override when given, the standard
    /// location otherwise.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom.map(PathBuf::from).unwrap_or_else(Self::config_file)
    }

    /// Loads the file, or returns defaults when it does not exist.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        DurationValue::new(self.default_custom_value, self.default_custom_unit).map_err(|e| {
            AppError::Config(format!("default_custom_value {}: {e}", self.default_custom_value))
        })?;
        if self.narrow_breakpoint == 0 {
            return Err(AppError::Config("narrow_breakpoint must be positive".into()));
        }
        Ok(())
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Keys from `KNOWN_KEYS` absent in the file at `path`.
    pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;
        let map = yaml
            .as_mapping()
            .ok_or_else(|| AppError::Config("configuration is not a mapping".into()))?;

        Ok(KNOWN_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(*k))
            .collect())
    }

    pub fn layout(&self) -> LayoutConfig {
        LayoutConfig {
            narrow_breakpoint: self.narrow_breakpoint,
            compact_presets: self.compact_presets,
        }
    }

    pub fn custom_seed(&self) -> CustomDraft {
        CustomDraft {
            value: self.default_custom_value,
            unit: self.default_custom_unit,
        }
    }
}
