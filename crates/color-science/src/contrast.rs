//! WCAG contrast computation and compliance tiering
//!
//! Implements the WCAG 2.1 relative-luminance and contrast-ratio formulas
//! and maps ratios onto the AAA / AA / AA Large / Fail tiers. Contrast
//! evaluation never errors: a color that cannot be parsed produces a `0.0`
//! ratio, which tiers as `Fail` and is treated by callers as a signal, not
//! a fault.

use serde::{Deserialize, Serialize};

use crate::color::hex_to_rgb;

// =============================================================================
// Luminance
// =============================================================================

/// WCAG 2.1 relative luminance of a color
///
/// sRGB channels are normalized to `[0, 1]`, gamma-corrected with
/// `c <= 0.03928 ? c / 12.92 : ((c + 0.055) / 1.055)^2.4`, and combined as
/// `0.2126 R + 0.7152 G + 0.0722 B`. Returns `None` on malformed input;
/// callers must handle the miss.
pub fn relative_luminance(hex: &str) -> Option<f64> {
    let rgb = hex_to_rgb(hex)?;

    let linear = |channel: u8| -> f64 {
        let c = channel as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };

    Some(0.2126 * linear(rgb.r) + 0.7152 * linear(rgb.g) + 0.0722 * linear(rgb.b))
}

/// WCAG contrast ratio between two colors
///
/// `(L_light + 0.05) / (L_dark + 0.05)` where `L_light` is the larger
/// luminance. Symmetric in its arguments. Returns `0.0` when either input
/// is not a parseable color — the "not computable" sentinel.
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    let (la, lb) = match (relative_luminance(a), relative_luminance(b)) {
        (Some(la), Some(lb)) => (la, lb),
        _ => return 0.0,
    };

    let lighter = la.max(lb);
    let darker = la.min(lb);

    (lighter + 0.05) / (darker + 0.05)
}

// =============================================================================
// Compliance Tiers
// =============================================================================

/// WCAG compliance tier for a contrast ratio
///
/// Variants are ordered weakest to strongest so tiers compare naturally:
/// `Fail < AaLarge < Aa < Aaa`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ComplianceLevel {
    /// Below every threshold
    Fail,
    /// Large-text minimum (ratio >= 3)
    AaLarge,
    /// Standard minimum (ratio >= 4.5)
    Aa,
    /// Enhanced (ratio >= 7)
    Aaa,
}

impl ComplianceLevel {
    /// Whether this tier satisfies the standard AA minimum
    pub fn passes_aa(&self) -> bool {
        *self >= ComplianceLevel::Aa
    }
}

impl std::fmt::Display for ComplianceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplianceLevel::Aaa => write!(f, "AAA"),
            ComplianceLevel::Aa => write!(f, "AA"),
            ComplianceLevel::AaLarge => write!(f, "AA Large"),
            ComplianceLevel::Fail => write!(f, "Fail"),
        }
    }
}

/// Classify a contrast ratio into its compliance tier
///
/// Thresholds are exactly `>= 7 -> AAA`, `>= 4.5 -> AA`, `>= 3 -> AA
/// Large`, else `Fail`.
pub fn compliance_level(ratio: f64) -> ComplianceLevel {
    if ratio >= 7.0 {
        ComplianceLevel::Aaa
    } else if ratio >= 4.5 {
        ComplianceLevel::Aa
    } else if ratio >= 3.0 {
        ComplianceLevel::AaLarge
    } else {
        ComplianceLevel::Fail
    }
}

// =============================================================================
// Contrast Result
// =============================================================================

/// A computed contrast ratio together with its compliance tier
///
/// Always recomputed from its two input colors, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    /// The WCAG contrast ratio (`0.0` if not computable)
    pub ratio: f64,
    /// The tier the ratio falls in
    pub level: ComplianceLevel,
}

/// Evaluate the contrast between two hex colors
pub fn evaluate_contrast(a: &str, b: &str) -> ContrastResult {
    let ratio = contrast_ratio(a, b);
    ContrastResult {
        ratio,
        level: compliance_level(ratio),
    }
}

// =============================================================================
// Tests
// =============================================================================
