use cube_lerp::{PlaneLayout, TerminalOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from an optional YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Directory the slice images are written to
    pub output_dir: PathBuf,

    /// Terminal layout
    pub layout: LayoutConfig,
}

/// Spacing of the terminal preview
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Spaces between cells in a row
    pub cell_spacing: usize,

    /// Spaces between slices printed side by side
    pub plane_spacing: usize,

    /// Blank lines between blocks of slices
    pub block_spacing: usize,

    /// Slices per printed block
    pub planes_per_row: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./images"),
            layout: LayoutConfig::default(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let planes = PlaneLayout::default();
        Self {
            cell_spacing: TerminalOptions::default().cell_spacing,
            plane_spacing: planes.plane_spacing,
            block_spacing: planes.block_spacing,
            planes_per_row: planes.planes_per_row,
        }
    }
}

impl LayoutConfig {
    pub fn plane_layout(&self) -> PlaneLayout {
        PlaneLayout {
            planes_per_row: self.planes_per_row.max(1),
            plane_spacing: self.plane_spacing,
            block_spacing: self.block_spacing,
        }
    }

    pub fn terminal_options(&self, show_hex: bool) -> TerminalOptions {
        TerminalOptions::new()
            .cell_spacing(self.cell_spacing)
            .show_hex(show_hex)
    }
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults when
    /// no path is given or the file cannot be used
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        output_dir = %config.output_dir.display(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}
