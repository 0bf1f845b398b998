//! Validation happens up front and leaves no side effects behind.

mod common;

use common::{fixtures, fixtures::verts, CountingRng};
use cube_lerp::{CubeError, MalformedInput};
use cubelerp::models::{AppConfig, RunRequest};
use cubelerp::services::CubePipeline;
use pretty_assertions::assert_eq;

fn pipeline() -> CubePipeline {
    CubePipeline::new(AppConfig::default())
}

#[test]
fn test_unsupported_format_fails_before_random_corners() {
    let mut rng = CountingRng::new(5);
    let request = RunRequest {
        format: "cmyk".to_string(),
        verts: String::new(),
        ..RunRequest::default()
    };

    let err = pipeline().prepare(&request, &mut rng).unwrap_err();

    assert_eq!(err, CubeError::UnsupportedFormat("cmyk".to_string()));
    assert_eq!(rng.draws, 0, "no random corners may be drawn");
}

#[test]
fn test_invalid_depth_fails_before_random_corners() {
    let mut rng = CountingRng::new(5);
    let request = RunRequest {
        depth: -2,
        ..RunRequest::default()
    };

    let err = pipeline().prepare(&request, &mut rng).unwrap_err();

    assert_eq!(err, CubeError::InvalidDepth(-2));
    assert_eq!(rng.draws, 0);
}

#[test]
fn test_oversized_depth_is_rejected() {
    let mut rng = CountingRng::new(5);
    let request = RunRequest {
        depth: 3_000_000,
        ..RunRequest::default()
    };

    let err = pipeline().prepare(&request, &mut rng).unwrap_err();

    assert_eq!(err, CubeError::InvalidDepth(3_000_000));
    assert_eq!(rng.draws, 0);
}

#[test]
fn test_empty_verts_draws_random_corners() {
    let mut rng = CountingRng::new(5);
    let prepared = pipeline()
        .prepare(&RunRequest::default(), &mut rng)
        .unwrap();

    assert!(rng.draws >= 24, "expected a draw per channel, got {}", rng.draws);
    for (position, color) in prepared.input.colors().iter() {
        let upper = 30 * (position.index() + 1);
        assert!((color.r as usize) < upper && (color.g as usize) < upper && (color.b as usize) < upper);
        assert_eq!(color.a, 255);
    }
}

#[test]
fn test_seven_codes_produce_no_files() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("images");
    let request = fixtures::image_request("rgba", 4, verts::SEVEN_CODES, &out);

    let err = pipeline()
        .prepare(&request, &mut CountingRng::new(1))
        .unwrap_err();

    assert_eq!(
        err,
        CubeError::MalformedCornerInput(MalformedInput::WrongCount { found: 7 })
    );
    assert!(!out.exists(), "no output may be written for invalid input");
}

#[test]
fn test_mixed_lengths_rejected() {
    let request = fixtures::terminal_request("oklab", 3, verts::MIXED_LENGTHS, false);
    let err = pipeline()
        .prepare(&request, &mut CountingRng::new(1))
        .unwrap_err();

    assert_eq!(
        err,
        CubeError::MalformedCornerInput(MalformedInput::LengthMismatch {
            index: 5,
            expected: 6,
            found: 8,
        })
    );
}

#[test]
fn test_error_messages_are_descriptive() {
    let request = fixtures::terminal_request("rgba", 3, verts::SEVEN_CODES, false);
    let err = pipeline()
        .prepare(&request, &mut CountingRng::new(1))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed corner input: must contain exactly 8 codes, found 7"
    );
}
