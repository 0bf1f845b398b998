//! Cubelerp - trilinear color-cube interpolation
//!
//! CLI-side glue around the `cube-lerp` engine: configuration, the run
//! pipeline, PNG output and terminal previews.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
