// ABOUTME: Shared types and configuration for nestbox.
// ABOUTME: Defines box geometry, size specs, and config file handling.

pub mod config;
pub mod geometry;
pub mod size;

pub use config::{Config, ConfigError};
pub use geometry::{Orientation, PixelBox, Rect};
pub use size::SizeSpec;
