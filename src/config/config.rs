use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub theme: ThemeConfig,
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show a row number column in front of the data
    pub show_row_numbers: bool,

    /// Blank cells between two columns
    pub column_spacing: u16,

    /// Draw the dragged header label next to the pointer while dragging
    pub drag_preview: bool,

    /// Use Unicode glyphs for the drag handle and indicators
    pub use_glyphs: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Header text color
    pub header_color: String,

    /// Color of a header while another column hovers over it
    pub drop_target_color: String,

    /// How the header being dragged is faded: "dim", "italic", "reversed"
    pub dragging_style: String,

    /// Table border color
    pub border_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Default log level, overridden by RUST_LOG
    pub log_level: String,

    /// Open the log pane on start
    pub show_log_pane: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_row_numbers: false,
            column_spacing: 1,
            drag_preview: true,
            use_glyphs: true,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            header_color: "cyan".to_string(),
            drop_target_color: "yellow".to_string(),
            dragging_style: "dim".to_string(),
            border_color: "dark_gray".to_string(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            log_level: "debug".to_string(),
            show_log_pane: false,
        }
    }
}

impl Config {
    /// Load config from the default location, writing defaults on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            info!(target: "config", "Created default config at {:?}", config_path);
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        debug!(target: "config", "Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Get the default config file path
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("dnd-table").join("config.toml"))
    }

    /// Create a default config file with comments
    pub fn create_default_with_comments() -> String {
        r#"# dnd-table Configuration File
# Location: ~/.config/dnd-table/config.toml (Linux)
#           ~/Library/Application Support/dnd-table/config.toml (macOS)
#           %APPDATA%\dnd-table\config.toml (Windows)

[display]
# Show a row number column in front of the data
show_row_numbers = false

# Blank cells between two columns
column_spacing = 1

# Draw the dragged header label next to the pointer while dragging
drag_preview = true

# Use Unicode glyphs for the drag handle (set to false for ASCII only)
use_glyphs = true

[theme]
# Colors: "black", "red", "green", "yellow", "blue", "magenta", "cyan",
# "gray", "dark_gray", "white", "orange", "purple", "teal", "pink"
# and the "light_*" variants
header_color = "cyan"

# Header color while another column is dragged over it
drop_target_color = "yellow"

# How the header being dragged is faded: "dim", "italic", "reversed"
dragging_style = "dim"

border_color = "dark_gray"

[behavior]
# Log level for the F5 log pane (RUST_LOG takes precedence)
log_level = "debug"

# Open the log pane on start
show_log_pane = false
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.display.show_row_numbers);
        assert_eq!(config.display.column_spacing, 1);
        assert_eq!(config.theme.dragging_style, "dim");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.theme.header_color, parsed.theme.header_color);
        assert_eq!(config.display.drag_preview, parsed.display.drag_preview);
    }

    #[test]
    fn test_commented_default_parses() {
        let parsed: Config = toml::from_str(&Config::create_default_with_comments()).unwrap();
        assert_eq!(parsed.theme.drop_target_color, "yellow");
        assert_eq!(parsed.behavior.log_level, "debug");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[display]\nshow_row_numbers = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.display.show_row_numbers);
        assert_eq!(config.display.column_spacing, 1);
        assert_eq!(config.theme.header_color, "cyan");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.theme.dragging_style = "italic".to_string();
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.theme.dragging_style, "italic");
    }
}
