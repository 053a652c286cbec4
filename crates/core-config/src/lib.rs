//! Configuration loading and parsing.
//!
//! Parses `oxcalc.toml` (or an override path provided by the binary). Every
//! section and field is optional; absent values take the defaults below.
//! Unknown fields are ignored so the file can evolve without warnings, and a
//! file that fails to parse falls back to defaults (logged at `warn`).
//!
//! ```toml
//! [format]
//! max_fraction_digits = 6
//! [behavior]
//! continue_after_result = false
//! [display]
//! group_thousands = false
//! show_last_expression = true
//! ```

use anyhow::Result;
use core_actions::DispatchOptions;
use core_text::{DEFAULT_MAX_FRACTION_DIGITS, FormatOptions};
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

/// Upper bound for `format.max_fraction_digits`; beyond this `f64` output is noise.
pub const MAX_FRACTION_DIGITS_LIMIT: usize = 12;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    #[serde(default = "FormatConfig::default_max_fraction_digits")]
    pub max_fraction_digits: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            max_fraction_digits: Self::default_max_fraction_digits(),
        }
    }
}

impl FormatConfig {
    const fn default_max_fraction_digits() -> usize {
        DEFAULT_MAX_FRACTION_DIGITS
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub continue_after_result: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    #[serde(default)]
    pub group_thousands: bool,
    #[serde(default = "DisplayConfig::default_show_last_expression")]
    pub show_last_expression: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            group_thousands: false,
            show_last_expression: Self::default_show_last_expression(),
        }
    }
}

impl DisplayConfig {
    const fn default_show_last_expression() -> bool {
        true
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub format: FormatConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// File contents as read, when a file was parsed.
    pub raw: Option<String>,
    /// Parsed (or default) data.
    pub file: ConfigFile,
    pub source: Option<PathBuf>,
}

/// Best-effort config path following platform conventions (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from("oxcalc.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("oxcalc").join("oxcalc.toml");
    }
    local
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            let mut cfg = Config {
                raw: Some(content),
                file,
                source: Some(path),
            };
            cfg.clamp();
            Ok(cfg)
        }
        Err(e) => {
            // Fall back to defaults rather than refusing to start.
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed");
            Ok(Config::default())
        }
    }
}

impl Config {
    fn clamp(&mut self) {
        let raw = self.file.format.max_fraction_digits;
        if raw > MAX_FRACTION_DIGITS_LIMIT {
            info!(
                target: "config",
                raw,
                clamped = MAX_FRACTION_DIGITS_LIMIT,
                "max_fraction_digits_clamped"
            );
            self.file.format.max_fraction_digits = MAX_FRACTION_DIGITS_LIMIT;
        }
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            max_fraction_digits: self.file.format.max_fraction_digits,
        }
    }

    pub fn dispatch_options(&self) -> DispatchOptions {
        DispatchOptions {
            format: self.format_options(),
            continue_after_result: self.file.behavior.continue_after_result,
        }
    }
}
