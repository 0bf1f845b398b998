//! Test fixtures and constants.

use cubelerp::models::RunRequest;
use std::path::Path;

/// Corner specifications
pub mod verts {
    /// The documented debug cube, six digits per code
    pub const DEBUG_CUBE: &str =
        "#000000,#0000FF,#00FF00,#00FFFF,#FF0000,#FF00FF,#FFFF00,#FFFFFF";

    /// Eight codes with explicit alpha
    pub const WITH_ALPHA: &str =
        "#00000000,#0000FFFF,#00FF00FF,#00FFFFFF,#FF0000FF,#FF00FFFF,#FFFF00FF,#FFFFFF80";

    /// Only seven codes
    pub const SEVEN_CODES: &str = "#000000,#0000FF,#00FF00,#00FFFF,#FF0000,#FF00FF,#FFFF00";

    /// Mixed code lengths
    pub const MIXED_LENGTHS: &str =
        "#000000,#0000FF,#00FF00,#00FFFF,#FF0000,#FF00FFFF,#FFFF00,#FFFFFF";
}

/// Request for PNG output into `dir`
pub fn image_request(format: &str, depth: i64, verts: &str, dir: &Path) -> RunRequest {
    RunRequest {
        format: format.to_string(),
        depth,
        verts: verts.to_string(),
        generate_images: true,
        output_dir: Some(dir.to_path_buf()),
        ..RunRequest::default()
    }
}

/// Request for terminal output
pub fn terminal_request(format: &str, depth: i64, verts: &str, hex: bool) -> RunRequest {
    RunRequest {
        format: format.to_string(),
        depth,
        verts: verts.to_string(),
        hex,
        ..RunRequest::default()
    }
}
