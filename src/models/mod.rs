pub mod config;
pub mod run_request;

pub use config::{AppConfig, LayoutConfig};
pub use run_request::RunRequest;
