use cube_lerp::DEFAULT_DEPTH;
use std::path::PathBuf;

/// Everything one invocation asks for, independent of how it was parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    /// Working space name ("rgba", "oklab")
    pub format: String,

    /// Grid depth as given; validated by the pipeline
    pub depth: i64,

    /// Eight comma-separated hex codes, or empty for random corners
    pub verts: String,

    /// Use the fixed debug cube instead of `verts`
    pub debug: bool,

    /// Terminal output shows hex codes instead of color blocks
    pub hex: bool,

    /// Terminal blocks carry their grid index
    pub labels: bool,

    /// Write PNG slices instead of printing
    pub generate_images: bool,

    /// Overrides the configured output directory
    pub output_dir: Option<PathBuf>,
}

impl Default for RunRequest {
    fn default() -> Self {
        Self {
            format: "rgba".to_string(),
            depth: DEFAULT_DEPTH as i64,
            verts: String::new(),
            debug: false,
            hex: false,
            labels: false,
            generate_images: false,
            output_dir: None,
        }
    }
}
