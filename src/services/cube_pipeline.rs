use std::path::{Path, PathBuf};
use std::time::Instant;

use cube_lerp::{
    layout_planes, parse_corners, validate_depth, CornerInput, CubeError, CubeInterpolator,
    SliceImage,
};
use rand::Rng;

use crate::error::PipelineError;
use crate::models::{AppConfig, RunRequest};
use crate::rendering::{describe_input, write_slices, SaveReport};

/// A validated run: working space, depth and corners are all known good
#[derive(Debug, Clone)]
pub struct PreparedRun {
    pub interpolator: CubeInterpolator,
    pub input: CornerInput,
}

impl PreparedRun {
    /// Verbose preview of the corners in the working space
    pub fn describe(&self) -> String {
        describe_input(
            &self.interpolator.working_corners(&self.input),
            self.interpolator.grid_depth(),
            self.interpolator.format(),
        )
    }
}

/// What a run produced
#[derive(Debug)]
pub enum CubeOutput {
    /// One image per depth-slice
    Images(Vec<SliceImage>),
    /// Printable terminal text
    Terminal(String),
}

/// Orchestrates validate → interpolate → export → save
pub struct CubePipeline {
    config: AppConfig,
}

impl CubePipeline {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Validate a request and resolve its corners.
    ///
    /// The format is checked first and the depth second, so neither error
    /// can be preceded by random corner generation.
    pub fn prepare<R: Rng>(
        &self,
        request: &RunRequest,
        rng: &mut R,
    ) -> Result<PreparedRun, CubeError> {
        let interpolator = CubeInterpolator::from_format_name(&request.format)?;
        let depth = validate_depth(request.depth)?;

        let input = if request.debug {
            tracing::debug!("Using debug cube");
            CornerInput::debug_cube()
        } else {
            parse_corners(&request.verts, rng)?
        };

        tracing::debug!(
            format = %interpolator.format(),
            depth,
            channels = input.channels().count(),
            corners = ?input.colors().as_array().map(|c| c.to_hex()),
            "Parsed input"
        );

        Ok(PreparedRun {
            interpolator: interpolator.depth(depth),
            input,
        })
    }

    /// Interpolate and export a prepared run.
    pub fn execute(
        &self,
        prepared: &PreparedRun,
        request: &RunRequest,
    ) -> Result<CubeOutput, CubeError> {
        let interpolator = &prepared.interpolator;

        let started = Instant::now();
        let grid = interpolator.interpolate(&prepared.input)?;
        tracing::info!(
            elapsed = ?started.elapsed(),
            cells = grid.len(),
            "Trilinear interp finished"
        );

        let started = Instant::now();
        let output = if request.generate_images {
            CubeOutput::Images(interpolator.export_raster(&grid))
        } else {
            let layout = &self.config.layout;
            let options = layout
                .terminal_options(request.hex)
                .show_labels(request.labels);
            let planes = interpolator.export_terminal(&grid, &options);
            CubeOutput::Terminal(layout_planes(&planes, &layout.plane_layout()))
        };
        tracing::info!(elapsed = ?started.elapsed(), "Export finished");

        Ok(output)
    }

    /// Output directory for a request: the request's override, else config
    pub fn output_dir(&self, request: &RunRequest) -> PathBuf {
        request
            .output_dir
            .clone()
            .unwrap_or_else(|| self.config.output_dir.clone())
    }

    /// Write slice images, failing if any single image could not be written
    pub fn save_images(
        &self,
        images: &[SliceImage],
        dir: &Path,
    ) -> Result<SaveReport, PipelineError> {
        let started = Instant::now();
        let report = write_slices(images, dir)?;
        tracing::info!(elapsed = ?started.elapsed(), "Output took");

        if report.is_complete() {
            Ok(report)
        } else {
            Err(PipelineError::ImagesNotWritten {
                failed: report.failed.len(),
                total: report.total(),
            })
        }
    }
}
