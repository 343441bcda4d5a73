//! Color tokens
//!
//! A [`ColorToken`] is the unit a generation proposal is reconciled into
//! and the unit the influence blender operates on. Tokens are never
//! mutated in place — regeneration always produces a new list.

use serde::{Deserialize, Serialize};

use crate::roles::DesignRole;

// =============================================================================
// Categories
// =============================================================================

/// Whether a token belongs to the main brand set or the supplement set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    /// One of the few colors that define the brand
    Main,
    /// A supporting color (charts, illustrations, states)
    #[default]
    Supplement,
}

impl std::fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenCategory::Main => write!(f, "main"),
            TokenCategory::Supplement => write!(f, "supplement"),
        }
    }
}

/// The role a main-category token plays within the brand set
///
/// Only meaningful for [`TokenCategory::Main`] tokens; normalization strips
/// it from supplements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MainColorType {
    /// The primary brand color
    Primary,
    /// The secondary brand color
    Secondary,
    /// A high-contrast counterpart to the primary
    Contrast,
    /// The main accent color
    AccentMain,
}

impl std::fmt::Display for MainColorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MainColorType::Primary => write!(f, "primary"),
            MainColorType::Secondary => write!(f, "secondary"),
            MainColorType::Contrast => write!(f, "contrast"),
            MainColorType::AccentMain => write!(f, "accent-main"),
        }
    }
}

// =============================================================================
// Color Token
// =============================================================================

/// A single named color with its role assignments
///
/// `hex` is always a 6-digit `#RRGGBB` string; 3-digit shorthand is
/// expanded during normalization before a token is constructed from
/// untrusted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorToken {
    /// The color value as `#RRGGBB`
    pub hex: String,
    /// Human-readable color name
    pub name: String,
    /// Main or supplement
    pub category: TokenCategory,
    /// Role within the main set (main-category tokens only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_color_type: Option<MainColorType>,
    /// Free-text description of the color's intent
    #[serde(default)]
    pub description: String,
    /// Design roles this color suits
    #[serde(default)]
    pub ideal_usecases: Vec<DesignRole>,
}

impl ColorToken {
    /// Create a token with empty description and no role assignments
    pub fn new(hex: impl Into<String>, name: impl Into<String>, category: TokenCategory) -> Self {
        Self {
            hex: hex.into(),
            name: name.into(),
            category,
            main_color_type: None,
            description: String::new(),
            ideal_usecases: Vec::new(),
        }
    }

    /// Set the main color type
    pub fn with_main_type(mut self, main_type: MainColorType) -> Self {
        self.main_color_type = Some(main_type);
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the ideal use cases
    pub fn with_usecases(mut self, usecases: Vec<DesignRole>) -> Self {
        self.ideal_usecases = usecases;
        self
    }

    /// Whether this token and another occupy the same slot
    ///
    /// Slot identity is `(category, main_color_type)` — the matching rule
    /// the influence blender pairs old and new tokens with.
    pub fn same_slot(&self, other: &ColorToken) -> bool {
        self.category == other.category && self.main_color_type == other.main_color_type
    }
}

// =============================================================================
// Tests
// =============================================================================
