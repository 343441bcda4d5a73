//! Color generation DNA
//!
//! The DNA fixes the shape of the palette a generation request must come
//! back with: how many main and supplement tokens, how far supplemental
//! hues may wander from the primary/secondary, and whether dedicated
//! error/success colors are required. Immutable for the duration of a
//! request.

use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, Result};

/// Configuration governing palette size and hue spread
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationDna {
    /// Number of main-category colors required (at least 2)
    pub num_main_colors: u32,
    /// Number of supplement-category colors required
    pub num_supplement_colors: u32,
    /// How distinct supplemental hues should be from the main colors, 0-1
    pub hue_variety: f64,
    /// Require a dedicated error color among the supplements
    pub include_error_color: bool,
    /// Require a dedicated success color among the supplements
    pub include_success_color: bool,
}

impl Default for GenerationDna {
    fn default() -> Self {
        Self {
            num_main_colors: 4,
            num_supplement_colors: 5,
            hue_variety: 0.5,
            include_error_color: false,
            include_success_color: false,
        }
    }
}

impl GenerationDna {
    /// Validate the DNA before a request is assembled from it
    pub fn validate(&self) -> Result<()> {
        if self.num_main_colors < 2 {
            return Err(GenerationError::Configuration(format!(
                "numMainColors must be at least 2, got {}",
                self.num_main_colors
            )));
        }
        if !(0.0..=1.0).contains(&self.hue_variety) {
            return Err(GenerationError::Configuration(format!(
                "hueVariety must be within [0, 1], got {}",
                self.hue_variety
            )));
        }
        Ok(())
    }

    /// Total number of color tokens a conforming proposal carries
    pub fn total_colors(&self) -> u32 {
        self.num_main_colors + self.num_supplement_colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dna() {
        let dna = GenerationDna::default();
        assert_eq!(dna.num_main_colors, 4);
        assert_eq!(dna.num_supplement_colors, 5);
        assert_eq!(dna.hue_variety, 0.5);
        assert!(!dna.include_error_color);
        assert!(!dna.include_success_color);
        assert!(dna.validate().is_ok());
    }

    #[test]
    fn test_too_few_main_colors_rejected() {
        let dna = GenerationDna {
            num_main_colors: 1,
            ..Default::default()
        };
        assert!(matches!(
            dna.validate(),
            Err(GenerationError::Configuration(_))
        ));
    }

    #[test]
    fn test_hue_variety_out_of_range_rejected() {
        let dna = GenerationDna {
            hue_variety: 1.5,
            ..Default::default()
        };
        assert!(dna.validate().is_err());
    }

    #[test]
    fn test_zero_supplements_allowed() {
        let dna = GenerationDna {
            num_supplement_colors: 0,
            ..Default::default()
        };
        assert!(dna.validate().is_ok());
        assert_eq!(dna.total_colors(), 4);
    }
}
