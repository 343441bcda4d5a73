//! Influence policy and palette blending
//!
//! Influence is a caller-supplied scalar in `[0, 1]` per axis describing
//! how strongly regeneration is anchored to prior values. Below 0.7 it
//! only steers the wording of the generation request; above 0.7 similarity
//! is enforced deterministically after the fact, because a generative
//! model cannot be trusted to honor numeric similarity constraints.
//!
//! Band boundaries use the `>` / `<=` convention throughout: `> 0.9`
//! discards the proposal, `0.7 <` influence `<= 0.9` blends, everything
//! else passes the proposal through.

use serde::{Deserialize, Serialize};

use color_science::blend;
use theme_tokens::ColorToken;

// =============================================================================
// Prompt Wording Buckets
// =============================================================================

/// Qualitative influence bucket used when phrasing the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InfluenceLevel {
    /// Influence below 0.2
    VeryLow,
    /// Influence in [0.2, 0.4)
    Low,
    /// Influence in [0.4, 0.6)
    Medium,
    /// Influence in [0.6, 0.8)
    High,
    /// Influence of 0.8 and above
    VeryHigh,
}

impl InfluenceLevel {
    /// Bucket a scalar influence value
    pub fn from_scalar(influence: f64) -> Self {
        if influence < 0.2 {
            InfluenceLevel::VeryLow
        } else if influence < 0.4 {
            InfluenceLevel::Low
        } else if influence < 0.6 {
            InfluenceLevel::Medium
        } else if influence < 0.8 {
            InfluenceLevel::High
        } else {
            InfluenceLevel::VeryHigh
        }
    }

    /// The wording dropped into the generation request
    pub fn phrase(&self) -> &'static str {
        match self {
            InfluenceLevel::VeryLow => {
                "Treat the existing values as loose inspiration at most; a complete departure is welcome."
            }
            InfluenceLevel::Low => {
                "Take light cues from the existing values but explore freely."
            }
            InfluenceLevel::Medium => {
                "Balance the existing character with fresh directions."
            }
            InfluenceLevel::High => {
                "Stay recognizably close to the existing values, adjusting rather than replacing."
            }
            InfluenceLevel::VeryHigh => {
                "Deviate from the existing values as little as possible."
            }
        }
    }
}

impl std::fmt::Display for InfluenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InfluenceLevel::VeryLow => write!(f, "very low"),
            InfluenceLevel::Low => write!(f, "low"),
            InfluenceLevel::Medium => write!(f, "medium"),
            InfluenceLevel::High => write!(f, "high"),
            InfluenceLevel::VeryHigh => write!(f, "very high"),
        }
    }
}

// =============================================================================
// Numeric Bands
// =============================================================================

/// What the blender does with a proposal at a given color influence
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InfluenceBand {
    /// Influence > 0.9: proposal is discarded, existing tokens stand
    Discard,
    /// 0.7 < influence <= 0.9: channel-level blend toward the old palette
    Blend {
        /// Blend weight toward the matched existing color, in [0, 1]
        factor: f64,
    },
    /// Influence <= 0.7: proposal is used as-is
    AsIs,
}

impl InfluenceBand {
    /// Classify a color influence value into its band
    pub fn classify(influence: f64) -> Self {
        if influence > 0.9 {
            InfluenceBand::Discard
        } else if influence > 0.7 {
            InfluenceBand::Blend {
                factor: (influence - 0.7) / 0.2,
            }
        } else {
            InfluenceBand::AsIs
        }
    }
}

// =============================================================================
// Per-Axis Settings
// =============================================================================

/// Influence scalars per regeneration axis, supplied per call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfluenceSettings {
    /// Anchoring of the color palette
    pub color: f64,
    /// Anchoring of the font selection
    pub font: f64,
    /// Anchoring to the business details
    pub business_details: f64,
}

impl Default for InfluenceSettings {
    fn default() -> Self {
        Self {
            color: 0.5,
            font: 0.5,
            business_details: 0.5,
        }
    }
}

impl InfluenceSettings {
    /// Create settings with every axis clamped into [0, 1]
    pub fn new(color: f64, font: f64, business_details: f64) -> Self {
        Self {
            color: color.clamp(0.0, 1.0),
            font: font.clamp(0.0, 1.0),
            business_details: business_details.clamp(0.0, 1.0),
        }
    }
}

// =============================================================================
// Palette Blending
// =============================================================================

/// Reconcile a proposed token list against the existing palette
///
/// Above the 0.9 boundary the proposal is discarded outright. In the blend
/// band each proposed token up to `min(len)` is paired with the existing
/// token occupying the same `(category, mainColorType)` slot — positional
/// when no slot matches — and its hex is pulled toward the pair by the
/// band-linear factor. Empty text fields inherit from the matched token.
/// At or below 0.7 the proposal passes through untouched.
pub fn blend_palette(
    existing: &[ColorToken],
    proposed: Vec<ColorToken>,
    influence: f64,
) -> Vec<ColorToken> {
    match InfluenceBand::classify(influence) {
        InfluenceBand::Discard => existing.to_vec(),
        InfluenceBand::AsIs => proposed,
        InfluenceBand::Blend { factor } => {
            let mut result = proposed;
            let pairs = existing.len().min(result.len());

            for i in 0..pairs {
                let matched = existing
                    .iter()
                    .find(|candidate| candidate.same_slot(&result[i]))
                    .unwrap_or(&existing[i]);

                result[i].hex = blend(&result[i].hex, &matched.hex, factor);

                if result[i].name.is_empty() {
                    result[i].name = matched.name.clone();
                }
                if result[i].description.is_empty() {
                    result[i].description = matched.description.clone();
                }
                if result[i].ideal_usecases.is_empty() {
                    result[i].ideal_usecases = matched.ideal_usecases.clone();
                }
            }

            result
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
