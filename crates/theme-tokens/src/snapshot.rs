//! Theme snapshot and request-side metadata
//!
//! A [`ThemeSnapshot`] is the read-only view of current theme state a
//! generation request embeds. Business details and icon recommendations
//! are pass-through text, never interpreted by the engine.

use serde::{Deserialize, Serialize};

use crate::token::ColorToken;
use crate::typography::FontSelection;

// =============================================================================
// Business Metadata
// =============================================================================

/// Free-text facts about the business the theme is for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDetails {
    /// Business or product name
    pub name: String,
    /// Industry or vertical
    #[serde(default)]
    pub industry: String,
    /// What the business does, in the owner's words
    #[serde(default)]
    pub description: String,
    /// Who the site is aimed at
    #[serde(default)]
    pub target_audience: String,
}

impl BusinessDetails {
    /// Whether there is anything worth putting into a prompt
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.industry.is_empty()
            && self.description.is_empty()
            && self.target_audience.is_empty()
    }
}

// =============================================================================
// Icon Proposal
// =============================================================================

/// Icon set proposed by a generation reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IconRecommendation {
    /// Name of the proposed icon set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_name: Option<String>,
    /// Visual style (outline, filled, duotone, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Library the set ships in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,
}

// =============================================================================
// Snapshot
// =============================================================================

/// The current theme state a generation request is anchored to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSnapshot {
    /// Current color tokens, highest priority first
    pub colors: Vec<ColorToken>,
    /// Current font selection
    #[serde(default)]
    pub fonts: FontSelection,
    /// Business metadata
    #[serde(default)]
    pub business: BusinessDetails,
}

impl ThemeSnapshot {
    /// Create a snapshot from the current token list
    pub fn new(colors: Vec<ColorToken>) -> Self {
        Self {
            colors,
            fonts: FontSelection::default(),
            business: BusinessDetails::default(),
        }
    }

    /// Set the font selection
    pub fn with_fonts(mut self, fonts: FontSelection) -> Self {
        self.fonts = fonts;
        self
    }

    /// Set the business details
    pub fn with_business(mut self, business: BusinessDetails) -> Self {
        self.business = business;
        self
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenCategory;

    #[test]
    fn test_business_details_empty() {
        assert!(BusinessDetails::default().is_empty());

        let details = BusinessDetails {
            name: "Tidepool Coffee".to_string(),
            ..Default::default()
        };
        assert!(!details.is_empty());
    }

    #[test]
    fn test_snapshot_builder() {
        let snapshot = ThemeSnapshot::new(vec![ColorToken::new(
            "#0078D4",
            "Azure",
            TokenCategory::Main,
        )])
        .with_fonts(FontSelection::new("Fraunces", "Inter"));

        assert_eq!(snapshot.colors.len(), 1);
        assert_eq!(snapshot.fonts.heading_font, "Fraunces");
    }

    #[test]
    fn test_snapshot_round_trip() {
        let snapshot = ThemeSnapshot::new(vec![]).with_business(BusinessDetails {
            name: "Tidepool Coffee".to_string(),
            industry: "Hospitality".to_string(),
            ..Default::default()
        });

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: ThemeSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
