//! Prism Studio theme engine
//!
//! A theme color-generation and accessibility-validation engine. Given a
//! seed brand color — and optionally an existing palette, font set, and
//! business metadata — it derives a complete role-assigned palette and its
//! CSS-variable map, scores color pairs against WCAG thresholds, drives
//! (and repairs) structured palette proposals from a generative text
//! provider, blends proposals against the prior palette by a continuous
//! influence scalar, and classifies image-region brightness to pick
//! readable overlay text.
//!
//! # Crates
//!
//! - [`color_science`] - hex parsing, WCAG contrast, compliance tiers,
//!   blending
//! - [`theme_tokens`] - token data model, palette derivation, the
//!   role→variable contract
//! - [`theme_gen`] - generation orchestration, reply repair, influence
//!   blending
//! - [`media_analysis`] - top-slice image brightness classification
//! - [`brand_cache`] - injected TTL'd key-value cache
//!
//! # Example
//!
//! ```rust
//! use prism_studio::{BrandPalette, evaluate_contrast, ComplianceLevel};
//!
//! let palette = BrandPalette::generate("#0078D4", false);
//! assert_eq!(palette.surface.background, "#FFFFFF");
//!
//! let contrast = evaluate_contrast(&palette.surface.background, "#000000");
//! assert_eq!(contrast.level, ComplianceLevel::Aaa);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use brand_cache::{BrandCache, CacheConfig, CacheError};
pub use color_science::{
    adjust_brightness, blend, compliance_level, contrast_ratio, evaluate_contrast,
    foreground_for, hex_to_rgb, perceived_brightness, relative_luminance, rgb_to_hex,
    ComplianceLevel, ContrastResult, Foreground, Rgb,
};
pub use media_analysis::{
    approximate_contrast, classify_brightness, AnalyzerConfig, BrightnessAnalyzer,
    BrightnessClass, BrightnessVerdict, TextColor, DEFAULT_TOP_FRACTION,
};
pub use theme_gen::{
    blend_palette, GenerationAxes, GenerationDna, GenerationError, GenerationOrchestrator,
    GenerationProposal, GenerationRequest, HttpTextGenerator, InfluenceBand, InfluenceLevel,
    InfluenceSettings, ProviderConfig, TextGenerator,
};
pub use theme_tokens::{
    resolve_variables, BrandPalette, BusinessDetails, ColorToken, DesignRole, FontRecommendation,
    FontSelection, IconRecommendation, MainColorType, ThemeSnapshot, TokenCategory,
};
