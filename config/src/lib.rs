//! # Config Crate
//!
//! Centralized configuration constants for the heightmap-to-STL pipeline.
//! Resolution limits, parameter bounds and export conventions are defined
//! here so the pipeline crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{HEIGHT_SCALE_DEFAULT, HEIGHT_SCALE_MAX, HEIGHT_SCALE_MIN, MAX_RESOLUTION};
//!
//! assert!((HEIGHT_SCALE_MIN..=HEIGHT_SCALE_MAX).contains(&HEIGHT_SCALE_DEFAULT));
//! assert_eq!(MAX_RESOLUTION, 500);
//! ```
//!
//! ## Parameter Ranges
//!
//! Defaults and bounds mirror the host's parameter widgets: height 10–40,
//! X/Y scale 0.1–10, step 0.1.

pub mod constants;

#[cfg(test)]
mod tests;
