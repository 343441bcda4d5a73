//! Generation request and proposal types
//!
//! A request snapshots current theme state plus the knobs for one
//! regeneration. A proposal is what comes back: untrusted until it has
//! passed the repair pipeline, and never applied to the live theme until
//! the caller commits it.

use serde::{Deserialize, Serialize};

use color_science::{foreground_for, Foreground};
use theme_tokens::{
    ColorToken, FontRecommendation, IconRecommendation, MainColorType, ThemeSnapshot,
};

use crate::dna::GenerationDna;
use crate::influence::InfluenceSettings;

// =============================================================================
// Axes
// =============================================================================

/// Which parts of the theme a request regenerates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationAxes {
    /// Regenerate the color palette
    pub colors: bool,
    /// Regenerate the font pairing
    pub fonts: bool,
    /// Regenerate the icon set
    pub icons: bool,
}

impl Default for GenerationAxes {
    fn default() -> Self {
        Self {
            colors: true,
            fonts: false,
            icons: false,
        }
    }
}

impl GenerationAxes {
    /// Request only the color palette
    pub fn colors_only() -> Self {
        Self::default()
    }

    /// Request every axis
    pub fn all() -> Self {
        Self {
            colors: true,
            fonts: true,
            icons: true,
        }
    }

    /// Whether anything is requested at all
    pub fn is_empty(&self) -> bool {
        !self.colors && !self.fonts && !self.icons
    }
}

// =============================================================================
// Request
// =============================================================================

/// One regeneration request against the generative provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Current theme state the request is anchored to
    pub snapshot: ThemeSnapshot,
    /// Which axes to regenerate
    pub axes: GenerationAxes,
    /// Palette shape configuration
    pub dna: GenerationDna,
    /// Per-axis anchoring strength
    pub influence: InfluenceSettings,
}

impl GenerationRequest {
    /// Create a colors-only request with default DNA and influence
    pub fn new(snapshot: ThemeSnapshot) -> Self {
        Self {
            snapshot,
            axes: GenerationAxes::default(),
            dna: GenerationDna::default(),
            influence: InfluenceSettings::default(),
        }
    }

    /// Set the axes
    pub fn with_axes(mut self, axes: GenerationAxes) -> Self {
        self.axes = axes;
        self
    }

    /// Set the DNA
    pub fn with_dna(mut self, dna: GenerationDna) -> Self {
        self.dna = dna;
        self
    }

    /// Set the influence settings
    pub fn with_influence(mut self, influence: InfluenceSettings) -> Self {
        self.influence = influence;
        self
    }
}

// =============================================================================
// Proposal
// =============================================================================

/// A repaired, normalized generation reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationProposal {
    /// Proposed color tokens (post-normalization, post-blending)
    pub colors: Vec<ColorToken>,
    /// The model's reasoning about the palette
    #[serde(default)]
    pub color_explanation: String,
    /// Proposed font pairing, when fonts were requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fonts: Option<FontRecommendation>,
    /// The model's reasoning about the fonts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_explanation: Option<String>,
    /// Proposed icon set, when icons were requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icons: Option<IconRecommendation>,
    /// The model's reasoning about the icons
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_explanation: Option<String>,
}

impl GenerationProposal {
    /// The proposed primary color, when the reply contains one
    pub fn primary_color(&self) -> Option<&ColorToken> {
        self.colors
            .iter()
            .find(|token| token.main_color_type == Some(MainColorType::Primary))
    }

    /// Overlay pole inferred for the proposed primary color
    pub fn primary_foreground(&self) -> Option<Foreground> {
        self.primary_color().map(|token| foreground_for(&token.hex))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_axes_colors_only() {
        let axes = GenerationAxes::default();
        assert!(axes.colors);
        assert!(!axes.fonts);
        assert!(!axes.icons);
        assert!(!axes.is_empty());
    }

    #[test]
    fn test_request_builder() {
        let request = GenerationRequest::new(ThemeSnapshot::default())
            .with_axes(GenerationAxes::all())
            .with_influence(InfluenceSettings::new(0.8, 0.2, 0.5));

        assert!(request.axes.icons);
        assert_eq!(request.influence.color, 0.8);
        assert_eq!(request.dna, GenerationDna::default());
    }

    #[test]
    fn test_primary_foreground_inference() {
        use theme_tokens::TokenCategory;

        let proposal = GenerationProposal {
            colors: vec![
                ColorToken::new("#FAFAFA", "Fog", TokenCategory::Supplement),
                ColorToken::new("#0078D4", "Azure", TokenCategory::Main)
                    .with_main_type(MainColorType::Primary),
            ],
            ..Default::default()
        };

        assert_eq!(proposal.primary_color().unwrap().name, "Azure");
        assert_eq!(proposal.primary_foreground(), Some(Foreground::Black));

        let empty = GenerationProposal::default();
        assert_eq!(empty.primary_foreground(), None);
    }

    #[test]
    fn test_proposal_serialization_skips_absent_axes() {
        let proposal = GenerationProposal {
            colors: vec![],
            color_explanation: "kept it minimal".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_string(&proposal).unwrap();
        assert!(json.contains("colorExplanation"));
        assert!(!json.contains("fontExplanation"));
        assert!(!json.contains("icons"));
    }
}
