use cube_lerp::CubeError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Cube(#[from] CubeError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Failed to write {failed} of {total} images")]
    ImagesNotWritten { failed: usize, total: usize },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Image too large: {size}x{size}")]
    ImageTooLarge { size: usize },

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Failed to write {}: {}", path.display(), source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
