//! Image brightness analysis for Prism Studio
//!
//! This crate decides whether overlay text on top of an image should be
//! white or dark by sampling the region the text will actually sit on —
//! the top slice of the image — and classifying its average perceived
//! brightness with a hysteresis band biased toward the readable default.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod brightness;

pub use brightness::{
    approximate_contrast, classify_brightness, AnalysisError, AnalyzerConfig, BrightnessAnalyzer,
    BrightnessClass, BrightnessVerdict, TextColor, DEFAULT_TOP_FRACTION,
};
