//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::path::Path;

/// Decoded PNG: dimensions and RGBA bytes
pub struct DecodedPng {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedPng {
    /// RGBA of the pixel at (row, col)
    pub fn pixel(&self, row: usize, col: usize) -> [u8; 4] {
        let at = (row * self.width as usize + col) * 4;
        [
            self.rgba[at],
            self.rgba[at + 1],
            self.rgba[at + 2],
            self.rgba[at + 3],
        ]
    }
}

/// Assert `path` is an 8-bit RGBA PNG and decode it
pub fn assert_rgba_png(path: &Path) -> DecodedPng {
    let file = std::fs::File::open(path)
        .unwrap_or_else(|e| panic!("Expected PNG at {}: {e}", path.display()));
    let decoder = png::Decoder::new(std::io::BufReader::new(file));
    let mut reader = decoder.read_info().expect("Should be a valid PNG");
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("Should decode frame");
    buf.truncate(info.buffer_size());

    assert_eq!(info.color_type, png::ColorType::Rgba, "Expected RGBA PNG");
    assert_eq!(info.bit_depth, png::BitDepth::Eight, "Expected 8-bit PNG");

    DecodedPng {
        width: info.width,
        height: info.height,
        rgba: buf,
    }
}

/// Assert the directory contains exactly the PNG files 0..count
pub fn assert_slice_files(dir: &Path, count: usize) {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Output directory should exist")
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort_by_key(|n| n.trim_end_matches(".png").parse::<usize>().unwrap_or(usize::MAX));

    let expected: Vec<String> = (0..count).map(|i| format!("{i}.png")).collect();
    assert_eq!(names, expected);
}

/// Assert two channels are within one 8-bit step
pub fn assert_close_rgba(actual: [u8; 4], expected: [u8; 4]) {
    let worst = actual
        .iter()
        .zip(expected.iter())
        .map(|(a, e)| a.abs_diff(*e))
        .max()
        .unwrap_or(0);
    assert!(
        worst <= 1,
        "Expected {expected:?} within 1, got {actual:?}"
    );
}
