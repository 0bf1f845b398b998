use crate::error::RenderError;
use cube_lerp::SliceImage;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Outcome of writing a set of slice images.
///
/// A failed image does not stop the remaining ones, and files already
/// written are left in place.
#[derive(Debug, Default)]
pub struct SaveReport {
    /// Files written successfully, in slice order
    pub written: Vec<PathBuf>,
    /// Files that could not be written
    pub failed: Vec<(PathBuf, RenderError)>,
}

impl SaveReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.written.len() + self.failed.len()
    }
}

/// File name for a depth-slice: `<index>.png`
pub fn slice_file_name(index: usize) -> String {
    format!("{index}.png")
}

/// Encode a slice as an 8-bit RGBA PNG.
pub fn encode_png(image: &SliceImage) -> Result<Vec<u8>, RenderError> {
    let size = image.width();
    let edge = u32::try_from(size).map_err(|_| RenderError::ImageTooLarge { size })?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, edge, edge);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&image.to_rgba_bytes())
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

fn write_slice(image: &SliceImage, path: &Path) -> Result<(), RenderError> {
    let bytes = encode_png(image)?;
    std::fs::write(path, &bytes).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote slice image");
    Ok(())
}

/// Write every slice to `dir`, creating the directory if needed.
///
/// Only a failure to create the directory is returned as an error;
/// per-image failures are collected in the report.
pub fn write_slices(images: &[SliceImage], dir: &Path) -> Result<SaveReport, RenderError> {
    std::fs::create_dir_all(dir)?;

    let mut report = SaveReport::default();
    for image in images {
        let path = dir.join(slice_file_name(image.index()));
        match write_slice(image, &path) {
            Ok(()) => report.written.push(path),
            Err(e) => {
                tracing::error!(%e, path = %path.display(), "Failed to write slice image");
                report.failed.push((path, e));
            }
        }
    }

    tracing::info!(
        dir = %dir.display(),
        written = report.written.len(),
        failed = report.failed.len(),
        "Saved slice images"
    );
    Ok(report)
}
