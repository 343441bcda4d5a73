//! Top-slice brightness classification
//!
//! The top fraction of an image is where a headline or navigation overlay
//! lands, so only that slice is sampled. Per-pixel perceived brightness
//! (`0.299R + 0.587G + 0.114B`) is averaged across the slice and
//! classified with hysteresis: the midrange dead zone resolves to dark,
//! which pairs with white text — the readability-first default.

use image::GenericImageView;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use color_science::{compliance_level, ContrastResult};

/// Fraction of image height sampled by default
pub const DEFAULT_TOP_FRACTION: f64 = 0.15;

/// Averages below this are dark
pub const DARK_BELOW: f64 = 115.0;

/// Averages above this are light
pub const LIGHT_ABOVE: f64 = 140.0;

// =============================================================================
// Errors
// =============================================================================

/// Errors from a single analysis request
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Image failed to decode or crop
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// Image file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

// =============================================================================
// Verdict Types
// =============================================================================

/// Brightness classification of an image region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrightnessClass {
    /// The region reads as dark
    Dark,
    /// The region reads as light
    Light,
}

/// Recommended overlay text color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    /// White text (for dark backgrounds)
    White,
    /// Dark text (for light backgrounds)
    Dark,
}

impl std::fmt::Display for TextColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextColor::White => write!(f, "white"),
            TextColor::Dark => write!(f, "dark"),
        }
    }
}

/// The outcome of analyzing one image region
///
/// Derived once per analyzed region and not cached across image changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrightnessVerdict {
    /// Dark or light classification of the sampled slice
    pub classification: BrightnessClass,
    /// Text color that stays readable on it
    pub recommended_text_color: TextColor,
    /// Average perceived brightness of the sampled pixels, 0-255
    pub average_brightness: f64,
}

// =============================================================================
// Classification
// =============================================================================

/// Classify an average brightness with hysteresis
///
/// Below [`DARK_BELOW`] is dark, above [`LIGHT_ABOVE`] is light, and the
/// dead zone in between resolves to dark.
pub fn classify_brightness(average: f64) -> BrightnessClass {
    if average < DARK_BELOW {
        BrightnessClass::Dark
    } else if average > LIGHT_ABOVE {
        BrightnessClass::Light
    } else {
        // Dead zone: readability-first default
        BrightnessClass::Dark
    }
}

impl BrightnessClass {
    /// The text color that contrasts with this background class
    pub fn recommended_text_color(&self) -> TextColor {
        match self {
            BrightnessClass::Dark => TextColor::White,
            BrightnessClass::Light => TextColor::Dark,
        }
    }
}

/// Coarse contrast estimate for a background class and text color pair
///
/// A fast plausibility check using fixed ratio estimates rather than the
/// WCAG formula; the matched pairings clear AAA, the mismatched ones fail.
pub fn approximate_contrast(background: BrightnessClass, text: TextColor) -> ContrastResult {
    let ratio = match (background, text) {
        (BrightnessClass::Dark, TextColor::White) => 15.0,
        (BrightnessClass::Dark, TextColor::Dark) => 1.3,
        (BrightnessClass::Light, TextColor::Dark) => 14.0,
        (BrightnessClass::Light, TextColor::White) => 1.6,
    };

    ContrastResult {
        ratio,
        level: compliance_level(ratio),
    }
}

// =============================================================================
// Analyzer
// =============================================================================

/// Configuration for the brightness analyzer
#[derive(Debug, Clone, Copy)]
pub struct AnalyzerConfig {
    /// Fraction of image height to sample from the top, in (0, 1]
    pub top_fraction: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_fraction: DEFAULT_TOP_FRACTION,
        }
    }
}

impl AnalyzerConfig {
    /// Set the sampled top fraction, clamped into (0, 1]
    pub fn with_top_fraction(mut self, fraction: f64) -> Self {
        self.top_fraction = fraction.clamp(0.01, 1.0);
        self
    }
}

/// Samples the top slice of an image and classifies its brightness
#[derive(Debug, Clone, Copy, Default)]
pub struct BrightnessAnalyzer {
    config: AnalyzerConfig,
}

impl BrightnessAnalyzer {
    /// Create an analyzer with the default top fraction
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom configuration
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Analyze encoded image bytes
    ///
    /// Decodes, crops the configured top slice (at least one row), and
    /// averages per-pixel perceived brightness. The decoded buffers live
    /// only inside this call — they are released when sampling completes,
    /// on success and failure alike.
    pub fn analyze_bytes(&self, bytes: &[u8]) -> Result<BrightnessVerdict> {
        let average = {
            let decoded = image::load_from_memory(bytes)
                .map_err(|e| AnalysisError::Decode(e.to_string()))?;
            let (width, height) = decoded.dimensions();

            let slice_height = ((height as f64 * self.config.top_fraction).ceil() as u32)
                .clamp(1, height.max(1));
            let slice = decoded.crop_imm(0, 0, width, slice_height).into_rgb8();

            let pixel_count = (slice.width() as u64 * slice.height() as u64).max(1);
            let total: f64 = slice
                .pixels()
                .map(|p| 0.299 * p.0[0] as f64 + 0.587 * p.0[1] as f64 + 0.114 * p.0[2] as f64)
                .sum();

            total / pixel_count as f64
        };

        let classification = classify_brightness(average);
        debug!(average, ?classification, "classified image top slice");

        Ok(BrightnessVerdict {
            classification,
            recommended_text_color: classification.recommended_text_color(),
            average_brightness: average,
        })
    }

    /// Analyze an image file on disk
    pub async fn analyze_file(&self, path: impl AsRef<std::path::Path>) -> Result<BrightnessVerdict> {
        let bytes = tokio::fs::read(path).await?;
        self.analyze_bytes(&bytes)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn png_of_gray(value: u8, width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([value, value, value]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    // ==========================================================================
    // Hysteresis Tests
    // ==========================================================================

    #[test]
    fn test_classify_below_band_is_dark() {
        assert_eq!(classify_brightness(100.0), BrightnessClass::Dark);
        assert_eq!(classify_brightness(0.0), BrightnessClass::Dark);
    }

    #[test]
    fn test_classify_above_band_is_light() {
        assert_eq!(classify_brightness(150.0), BrightnessClass::Light);
        assert_eq!(classify_brightness(255.0), BrightnessClass::Light);
    }

    #[test]
    fn test_classify_dead_zone_biases_dark() {
        assert_eq!(classify_brightness(125.0), BrightnessClass::Dark);
        assert_eq!(classify_brightness(115.0), BrightnessClass::Dark);
        assert_eq!(classify_brightness(140.0), BrightnessClass::Dark);
    }

    #[test]
    fn test_text_recommendation() {
        assert_eq!(
            BrightnessClass::Dark.recommended_text_color(),
            TextColor::White
        );
        assert_eq!(
            BrightnessClass::Light.recommended_text_color(),
            TextColor::Dark
        );
    }

    // ==========================================================================
    // Approximate Contrast Tests
    // ==========================================================================

    #[test]
    fn test_approximate_contrast_table() {
        use color_science::ComplianceLevel;

        let matched = approximate_contrast(BrightnessClass::Dark, TextColor::White);
        assert_eq!(matched.level, ComplianceLevel::Aaa);

        let matched = approximate_contrast(BrightnessClass::Light, TextColor::Dark);
        assert_eq!(matched.level, ComplianceLevel::Aaa);

        let mismatched = approximate_contrast(BrightnessClass::Dark, TextColor::Dark);
        assert_eq!(mismatched.level, ComplianceLevel::Fail);

        let mismatched = approximate_contrast(BrightnessClass::Light, TextColor::White);
        assert_eq!(mismatched.level, ComplianceLevel::Fail);
    }

    // ==========================================================================
    // Image Sampling Tests
    // ==========================================================================

    #[test]
    fn test_analyze_dark_image() {
        let verdict = BrightnessAnalyzer::new()
            .analyze_bytes(&png_of_gray(100, 40, 40))
            .unwrap();

        assert_eq!(verdict.classification, BrightnessClass::Dark);
        assert_eq!(verdict.recommended_text_color, TextColor::White);
        assert!((verdict.average_brightness - 100.0).abs() < 0.5);
    }

    #[test]
    fn test_analyze_light_image() {
        let verdict = BrightnessAnalyzer::new()
            .analyze_bytes(&png_of_gray(150, 40, 40))
            .unwrap();

        assert_eq!(verdict.classification, BrightnessClass::Light);
        assert_eq!(verdict.recommended_text_color, TextColor::Dark);
    }

    #[test]
    fn test_analyze_dead_zone_image_recommends_white() {
        let verdict = BrightnessAnalyzer::new()
            .analyze_bytes(&png_of_gray(125, 40, 40))
            .unwrap();

        assert_eq!(verdict.classification, BrightnessClass::Dark);
        assert_eq!(verdict.recommended_text_color, TextColor::White);
    }

    #[test]
    fn test_analyze_samples_only_top_slice() {
        // Dark band across the top 15 rows, white below: only the band is
        // sampled at the default fraction
        let mut img = RgbImage::from_pixel(100, 100, Rgb([255, 255, 255]));
        for y in 0..15 {
            for x in 0..100 {
                img.put_pixel(x, y, Rgb([10, 10, 10]));
            }
        }
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();

        let verdict = BrightnessAnalyzer::new().analyze_bytes(&bytes).unwrap();
        assert_eq!(verdict.classification, BrightnessClass::Dark);
    }

    #[test]
    fn test_analyze_tiny_image_samples_at_least_one_row() {
        // 0.15 of 3 rows rounds up to one full row
        let verdict = BrightnessAnalyzer::new()
            .analyze_bytes(&png_of_gray(200, 3, 3))
            .unwrap();
        assert_eq!(verdict.classification, BrightnessClass::Light);
    }

    #[test]
    fn test_analyze_rejects_undecodable_bytes() {
        let err = BrightnessAnalyzer::new()
            .analyze_bytes(b"definitely not an image")
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Decode(_)));
    }

    #[test]
    fn test_config_clamps_fraction() {
        let config = AnalyzerConfig::default().with_top_fraction(3.0);
        assert_eq!(config.top_fraction, 1.0);

        let config = AnalyzerConfig::default().with_top_fraction(0.0);
        assert_eq!(config.top_fraction, 0.01);
    }

    // ==========================================================================
    // Async Entry Point Tests
    // ==========================================================================

    #[tokio::test]
    async fn test_analyze_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slice.png");
        std::fs::write(&path, png_of_gray(150, 20, 20)).unwrap();

        let verdict = BrightnessAnalyzer::new().analyze_file(&path).await.unwrap();
        assert_eq!(verdict.classification, BrightnessClass::Light);
    }

    #[tokio::test]
    async fn test_analyze_missing_file_is_io_error() {
        let err = BrightnessAnalyzer::new()
            .analyze_file("/definitely/not/here.png")
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Io(_)));
    }
}
