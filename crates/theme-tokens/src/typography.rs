//! Typography pass-through types
//!
//! Font choice is not decided by this engine — these types carry the text
//! fields that flow from the current theme into a generation request and
//! back out of a proposal.

use serde::{Deserialize, Serialize};

// =============================================================================
// Current Selection
// =============================================================================

/// The fonts the theme currently uses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FontSelection {
    /// Font family used for headings
    pub heading_font: String,
    /// Font family used for body text
    pub body_font: String,
}

impl FontSelection {
    /// Create a selection from heading and body family names
    pub fn new(heading_font: impl Into<String>, body_font: impl Into<String>) -> Self {
        Self {
            heading_font: heading_font.into(),
            body_font: body_font.into(),
        }
    }

    /// Whether any font is actually set
    pub fn is_empty(&self) -> bool {
        self.heading_font.is_empty() && self.body_font.is_empty()
    }
}

// =============================================================================
// Proposal
// =============================================================================

/// Fonts proposed by a generation reply
///
/// All fields are optional: the model may propose only part of a pairing,
/// and absent fields leave the current selection untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FontRecommendation {
    /// Proposed heading font family
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_font: Option<String>,
    /// Proposed body font family
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_font: Option<String>,
    /// Free-text usage notes (weights, pairings, tone)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_notes: Option<String>,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_selection_empty() {
        assert!(FontSelection::default().is_empty());
        assert!(!FontSelection::new("Inter", "").is_empty());
    }

    #[test]
    fn test_recommendation_partial_deserialization() {
        let rec: FontRecommendation =
            serde_json::from_str(r#"{"headingFont":"Fraunces"}"#).unwrap();
        assert_eq!(rec.heading_font.as_deref(), Some("Fraunces"));
        assert_eq!(rec.body_font, None);
    }

    #[test]
    fn test_recommendation_omits_absent_fields() {
        let json = serde_json::to_string(&FontRecommendation::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
