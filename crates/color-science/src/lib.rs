//! Color-space utilities for Prism Studio
//!
//! This crate provides the pure color math the rest of the engine is built
//! on: hex parsing, WCAG luminance and contrast, compliance tiering,
//! brightness adjustment, and linear blending. Everything here is a pure
//! function of its inputs; malformed colors degrade to sentinel values
//! rather than panics.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color;
pub mod contrast;

pub use color::{
    adjust_brightness, blend, foreground_for, hex_to_rgb, perceived_brightness, rgb_to_hex,
    Foreground, Rgb,
};
pub use contrast::{
    compliance_level, contrast_ratio, evaluate_contrast, relative_luminance, ComplianceLevel,
    ContrastResult,
};
