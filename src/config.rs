//! Configuration loading and defaults.
//!
//! ferrofetch reads a TOML file from `~/.config/ferrofetch/config.toml`,
//! or from the path given with `--config`. Every option has a default, so
//! a missing file just means a stock run.

use crate::error::{FerrofetchError, Result};
use crate::fields::FieldKind;
use dirs::config_dir;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub messages: Messages,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub display_logo: bool,
    pub gap: u32,
    pub delimiter: String,
    pub separator: String,
    pub accent_color: String,
    pub ascii_distro: String,
    pub ascii_path: String,
    pub custom_ascii_logo: Vec<String>,
    pub colors_style: String,
    pub colors_icon: String,
    pub show_arch: bool,
    pub short_cpu_info: bool,
    pub memory_in_gib: bool,
    pub enabled_fields: Vec<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            display_logo: true,
            gap: 3,
            delimiter: ":".to_string(),
            separator: "-".to_string(),
            accent_color: String::new(),
            ascii_distro: String::new(),
            ascii_path: String::new(),
            custom_ascii_logo: Vec::new(),
            colors_style: "classic".to_string(),
            colors_icon: String::new(),
            show_arch: true,
            short_cpu_info: true,
            memory_in_gib: true,
            enabled_fields: default_enabled_fields(),
        }
    }
}

// Empty entries are deliberate: they render as spacer lines.
fn default_enabled_fields() -> Vec<String> {
    [
        "User",
        "Separator",
        "OS",
        "Kernel",
        "Uptime",
        "Packages",
        "",
        "WM",
        "Resolution",
        "",
        "Shell",
        "Terminal",
        "",
        "CPU",
        "Memory",
        "",
        "Colors",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Per-field label text, each overridable as `<field>_message`.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Messages {
    pub os_message: String,
    pub kernel_message: String,
    pub uptime_message: String,
    pub packages_message: String,
    pub de_message: String,
    pub wm_message: String,
    pub resolution_message: String,
    pub shell_message: String,
    pub terminal_message: String,
    pub cpu_message: String,
    pub memory_message: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            os_message: "OS".to_string(),
            kernel_message: "Kernel".to_string(),
            uptime_message: "Uptime".to_string(),
            packages_message: "Packages".to_string(),
            de_message: "DE".to_string(),
            wm_message: "WM".to_string(),
            resolution_message: "Resolution".to_string(),
            shell_message: "Shell".to_string(),
            terminal_message: "Terminal".to_string(),
            cpu_message: "CPU".to_string(),
            memory_message: "Memory".to_string(),
        }
    }
}

impl Messages {
    /// Label shown before the delimiter for a field. Kinds that format
    /// their whole line themselves have none.
    pub fn label(&self, kind: &FieldKind) -> Option<&str> {
        match kind {
            FieldKind::Os => Some(&self.os_message),
            FieldKind::Kernel => Some(&self.kernel_message),
            FieldKind::Uptime => Some(&self.uptime_message),
            FieldKind::Packages => Some(&self.packages_message),
            FieldKind::Desktop => Some(&self.de_message),
            FieldKind::Wm => Some(&self.wm_message),
            FieldKind::Resolution => Some(&self.resolution_message),
            FieldKind::Shell => Some(&self.shell_message),
            FieldKind::Terminal => Some(&self.terminal_message),
            FieldKind::Cpu => Some(&self.cpu_message),
            FieldKind::Memory => Some(&self.memory_message),
            _ => None,
        }
    }
}

/// Load the configuration. An explicit path wins over the user's config
/// directory; a missing default file falls back to stock options, while an
/// explicit path that cannot be read is an error.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(Config::default()),
        },
    };

    let contents = fs::read_to_string(&path).map_err(|err| {
        FerrofetchError::Config(format!("unable to read {}: {}", path.display(), err))
    })?;
    parse_str(&contents)
}

/// Parse configuration text. Invalid TOML is a configuration error.
pub fn parse_str(contents: &str) -> Result<Config> {
    toml::de::from_str(contents)
        .map_err(|err| FerrofetchError::Config(format!("invalid configuration: {}", err)))
}

fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("ferrofetch/config.toml"))
}
