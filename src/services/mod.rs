pub mod cube_pipeline;

pub use cube_pipeline::{CubeOutput, CubePipeline, PreparedRun};
