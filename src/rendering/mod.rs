pub mod png_export;
pub mod preview;

pub use png_export::{encode_png, write_slices, SaveReport};
pub use preview::describe_input;
