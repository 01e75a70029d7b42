//! # Config Crate
//!
//! Centralized configuration constants for the ArchLab mesh engine.
//! All tolerances, parameter limits and generator defaults are defined here
//! so that every generator and post-processing pass agrees on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, MIN_SEGMENTS, MeshConfig};
//!
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! let requested = 2;
//! assert!(requested < MIN_SEGMENTS);
//!
//! let config = MeshConfig::default();
//! assert!(config.weld_distance > EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host Compatible**: Defaults match the editor's property defaults

pub mod constants;

#[cfg(test)]
mod tests;
