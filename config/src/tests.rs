//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

use crate::constants::*;

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_max_resolution_matches_host() {
    assert_eq!(MAX_RESOLUTION, 500);
}

#[test]
fn test_max_grid_indices_fit_u32() {
    let vertices = MAX_RESOLUTION as u64 * MAX_RESOLUTION as u64;
    assert!(vertices <= u32::MAX as u64);
}

#[test]
fn test_max_intensity_is_byte_range() {
    assert_eq!(MAX_INTENSITY, u8::MAX as f64);
}

// =============================================================================
// PARAMETER TESTS
// =============================================================================

#[test]
fn test_height_defaults_within_bounds() {
    assert!(HEIGHT_SCALE_MIN < HEIGHT_SCALE_MAX);
    assert!(HEIGHT_SCALE_BOUNDS.contains(HEIGHT_SCALE_DEFAULT));
}

#[test]
fn test_xy_defaults_within_bounds() {
    assert!(XY_SCALE_MIN > 0.0, "zero spacing would collapse the grid");
    assert!(XY_SCALE_MIN < XY_SCALE_MAX);
    assert!(XY_SCALE_BOUNDS.contains(XY_SCALE_DEFAULT));
}

// =============================================================================
// EXPORT TESTS
// =============================================================================

#[test]
fn test_stl_conventions() {
    assert_eq!(STL_EXTENSION, "stl");
    assert!(!COLLISION_SEPARATOR.is_empty());
}
