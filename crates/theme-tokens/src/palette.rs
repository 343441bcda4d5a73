//! Brand palette derivation
//!
//! A [`BrandPalette`] is recomputed wholesale from a seed color and a
//! light/dark flag every time either changes; it is never patched field by
//! field. Only the brand and gradient roles track the seed — surfaces and
//! semantic colors are fixed literal sets so a theme stays usable no
//! matter how extreme the chosen primary is.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use color_science::{adjust_brightness, foreground_for, Foreground};

use crate::roles::DesignRole;
use crate::token::ColorToken;

// =============================================================================
// Fixed Reference Colors
// =============================================================================

/// Semantic reference hues, independent of any brand color
mod reference {
    /// Destructive / error red
    pub const DESTRUCTIVE: &str = "#EF4444";
    /// Success green
    pub const SUCCESS: &str = "#22C55E";
    /// Warning amber
    pub const WARNING: &str = "#F59E0B";
    /// Informational blue
    pub const INFO: &str = "#3B82F6";
}

/// Surface literals for light themes
mod light_surface {
    pub const BACKGROUND: &str = "#FFFFFF";
    pub const CARD: &str = "#FFFFFF";
    pub const POPOVER: &str = "#FFFFFF";
    pub const MUTED: &str = "#F5F5F5";
    pub const MUTED_FOREGROUND: &str = "#737373";
}

/// Surface literals for dark themes
mod dark_surface {
    pub const BACKGROUND: &str = "#0A0A0A";
    pub const CARD: &str = "#171717";
    pub const POPOVER: &str = "#171717";
    pub const MUTED: &str = "#262626";
    pub const MUTED_FOREGROUND: &str = "#A3A3A3";
}

// =============================================================================
// Palette Structure
// =============================================================================

/// Brand-tracking colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandColors {
    /// The seed brand color
    pub main: String,
    /// Overlay pole paired with the seed color
    pub on: Foreground,
    /// Brightness-shifted companion to the seed
    pub secondary: String,
}

/// Fixed surface colors for the theme's light/dark mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceColors {
    /// Page background
    pub background: String,
    /// Card surface
    pub card: String,
    /// Popover surface
    pub popover: String,
    /// Text pole on surfaces
    pub on: Foreground,
    /// Muted surface
    pub muted: String,
    /// Text on muted surfaces
    pub muted_foreground: String,
}

/// Fixed semantic state colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticColors {
    /// Destructive / error color
    pub destructive: String,
    /// Success color
    pub success: String,
    /// Warning color
    pub warning: String,
    /// Informational color
    pub info: String,
}

/// Brand gradient endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientColors {
    /// Gradient start (the seed color)
    pub from: String,
    /// Gradient end (the derived secondary)
    pub to: String,
    /// Accent stop shifted away from the seed
    pub accent: String,
}

/// A complete role-assigned palette derived from one seed color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandPalette {
    /// Brand-tracking colors
    pub brand: BrandColors,
    /// Fixed surface set for the mode
    pub surface: SurfaceColors,
    /// Fixed semantic state colors
    pub semantic: SemanticColors,
    /// Brand gradient
    pub gradient: GradientColors,
}

impl BrandPalette {
    /// Derive a full palette from a seed color
    ///
    /// `secondary` shifts the seed darker in dark mode (-20) and lighter in
    /// light mode (+60); the gradient accent shifts the opposite way (+40 /
    /// -40). Surfaces are the near-black or near-white literal set for the
    /// mode, and semantic colors are fixed reference hues, so both remain
    /// recognizable regardless of the seed.
    pub fn generate(primary: &str, is_dark: bool) -> Self {
        let secondary = adjust_brightness(primary, if is_dark { -20 } else { 60 });
        let accent = adjust_brightness(primary, if is_dark { 40 } else { -40 });

        let surface = if is_dark {
            SurfaceColors {
                background: dark_surface::BACKGROUND.to_string(),
                card: dark_surface::CARD.to_string(),
                popover: dark_surface::POPOVER.to_string(),
                on: Foreground::White,
                muted: dark_surface::MUTED.to_string(),
                muted_foreground: dark_surface::MUTED_FOREGROUND.to_string(),
            }
        } else {
            SurfaceColors {
                background: light_surface::BACKGROUND.to_string(),
                card: light_surface::CARD.to_string(),
                popover: light_surface::POPOVER.to_string(),
                on: Foreground::Black,
                muted: light_surface::MUTED.to_string(),
                muted_foreground: light_surface::MUTED_FOREGROUND.to_string(),
            }
        };

        Self {
            brand: BrandColors {
                main: primary.to_string(),
                on: foreground_for(primary),
                secondary: secondary.clone(),
            },
            surface,
            semantic: SemanticColors {
                destructive: reference::DESTRUCTIVE.to_string(),
                success: reference::SUCCESS.to_string(),
                warning: reference::WARNING.to_string(),
                info: reference::INFO.to_string(),
            },
            gradient: GradientColors {
                from: primary.to_string(),
                to: secondary,
                accent,
            },
        }
    }

    /// Resolve the palette into the CSS-variable map the consumer reads
    ///
    /// Every palette field maps onto a named design-role variable; the
    /// consumer never sees the palette structure itself.
    pub fn css_variables(&self) -> BTreeMap<String, String> {
        let mut vars = BTreeMap::new();
        let mut set = |role: DesignRole, value: &str| {
            vars.insert(role.as_str().to_string(), value.to_string());
        };

        set(DesignRole::Background, &self.surface.background);
        set(DesignRole::Foreground, self.surface.on.as_hex());
        set(DesignRole::Card, &self.surface.card);
        set(DesignRole::CardForeground, self.surface.on.as_hex());
        set(DesignRole::Popover, &self.surface.popover);
        set(DesignRole::PopoverForeground, self.surface.on.as_hex());
        set(DesignRole::Primary, &self.brand.main);
        set(DesignRole::PrimaryForeground, self.brand.on.as_hex());
        set(DesignRole::Secondary, &self.brand.secondary);
        set(DesignRole::SecondaryForeground, self.brand.on.as_hex());
        set(DesignRole::Muted, &self.surface.muted);
        set(DesignRole::MutedForeground, &self.surface.muted_foreground);
        set(DesignRole::Accent, &self.gradient.accent);
        set(DesignRole::AccentForeground, self.brand.on.as_hex());
        set(DesignRole::Destructive, &self.semantic.destructive);
        set(DesignRole::DestructiveForeground, Foreground::White.as_hex());
        set(DesignRole::Border, &self.surface.muted);
        set(DesignRole::Input, &self.surface.muted);
        set(DesignRole::Ring, &self.brand.main);
        set(DesignRole::Chart1, &self.gradient.from);
        set(DesignRole::Chart2, &self.gradient.to);
        set(DesignRole::Chart3, &self.gradient.accent);
        set(DesignRole::Chart4, &self.semantic.info);
        set(DesignRole::Chart5, &self.semantic.success);

        vars
    }
}

// =============================================================================
// Token Resolution
// =============================================================================

/// Resolve a token list into the role→color variable map
///
/// Earlier tokens win a contested role, so callers put higher-priority
/// tokens first. Tokens with no role assignments contribute nothing.
pub fn resolve_variables(tokens: &[ColorToken]) -> BTreeMap<String, String> {
    let mut vars: BTreeMap<String, String> = BTreeMap::new();

    for token in tokens {
        for role in &token.ideal_usecases {
            vars.entry(role.as_str().to_string())
                .or_insert_with(|| token.hex.clone());
        }
    }

    vars
}

// =============================================================================
// Tests
// =============================================================================
