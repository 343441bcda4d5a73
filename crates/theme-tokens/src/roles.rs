//! Design-role names shared with the styling consumer
//!
//! Every role maps 1:1 to a CSS custom property the rendering layer reads.
//! The set is closed: token normalization drops any role name a generation
//! proposal invents that is not listed here.

use serde::{Deserialize, Serialize};

// =============================================================================
// Design Roles
// =============================================================================

/// The fixed set of design-role variables a color can be assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DesignRole {
    /// Page background
    #[serde(rename = "background")]
    Background,
    /// Default text on the page background
    #[serde(rename = "foreground")]
    Foreground,
    /// Card surface
    #[serde(rename = "card")]
    Card,
    /// Text on card surfaces
    #[serde(rename = "card-foreground")]
    CardForeground,
    /// Popover surface
    #[serde(rename = "popover")]
    Popover,
    /// Text on popover surfaces
    #[serde(rename = "popover-foreground")]
    PopoverForeground,
    /// Primary brand color
    #[serde(rename = "primary")]
    Primary,
    /// Text on primary-colored surfaces
    #[serde(rename = "primary-foreground")]
    PrimaryForeground,
    /// Secondary brand color
    #[serde(rename = "secondary")]
    Secondary,
    /// Text on secondary-colored surfaces
    #[serde(rename = "secondary-foreground")]
    SecondaryForeground,
    /// Muted surface
    #[serde(rename = "muted")]
    Muted,
    /// Text on muted surfaces
    #[serde(rename = "muted-foreground")]
    MutedForeground,
    /// Accent color
    #[serde(rename = "accent")]
    Accent,
    /// Text on accent-colored surfaces
    #[serde(rename = "accent-foreground")]
    AccentForeground,
    /// Destructive-action color
    #[serde(rename = "destructive")]
    Destructive,
    /// Text on destructive-colored surfaces
    #[serde(rename = "destructive-foreground")]
    DestructiveForeground,
    /// Border color
    #[serde(rename = "border")]
    Border,
    /// Form input border color
    #[serde(rename = "input")]
    Input,
    /// Focus-ring color
    #[serde(rename = "ring")]
    Ring,
    /// First chart series color
    #[serde(rename = "chart-1")]
    Chart1,
    /// Second chart series color
    #[serde(rename = "chart-2")]
    Chart2,
    /// Third chart series color
    #[serde(rename = "chart-3")]
    Chart3,
    /// Fourth chart series color
    #[serde(rename = "chart-4")]
    Chart4,
    /// Fifth chart series color
    #[serde(rename = "chart-5")]
    Chart5,
}

impl DesignRole {
    /// All roles, in the order the styling consumer declares its variables
    pub const ALL: [DesignRole; 24] = [
        DesignRole::Background,
        DesignRole::Foreground,
        DesignRole::Card,
        DesignRole::CardForeground,
        DesignRole::Popover,
        DesignRole::PopoverForeground,
        DesignRole::Primary,
        DesignRole::PrimaryForeground,
        DesignRole::Secondary,
        DesignRole::SecondaryForeground,
        DesignRole::Muted,
        DesignRole::MutedForeground,
        DesignRole::Accent,
        DesignRole::AccentForeground,
        DesignRole::Destructive,
        DesignRole::DestructiveForeground,
        DesignRole::Border,
        DesignRole::Input,
        DesignRole::Ring,
        DesignRole::Chart1,
        DesignRole::Chart2,
        DesignRole::Chart3,
        DesignRole::Chart4,
        DesignRole::Chart5,
    ];

    /// The CSS variable name for this role
    pub fn as_str(&self) -> &'static str {
        match self {
            DesignRole::Background => "background",
            DesignRole::Foreground => "foreground",
            DesignRole::Card => "card",
            DesignRole::CardForeground => "card-foreground",
            DesignRole::Popover => "popover",
            DesignRole::PopoverForeground => "popover-foreground",
            DesignRole::Primary => "primary",
            DesignRole::PrimaryForeground => "primary-foreground",
            DesignRole::Secondary => "secondary",
            DesignRole::SecondaryForeground => "secondary-foreground",
            DesignRole::Muted => "muted",
            DesignRole::MutedForeground => "muted-foreground",
            DesignRole::Accent => "accent",
            DesignRole::AccentForeground => "accent-foreground",
            DesignRole::Destructive => "destructive",
            DesignRole::DestructiveForeground => "destructive-foreground",
            DesignRole::Border => "border",
            DesignRole::Input => "input",
            DesignRole::Ring => "ring",
            DesignRole::Chart1 => "chart-1",
            DesignRole::Chart2 => "chart-2",
            DesignRole::Chart3 => "chart-3",
            DesignRole::Chart4 => "chart-4",
            DesignRole::Chart5 => "chart-5",
        }
    }
}

impl std::fmt::Display for DesignRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DesignRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DesignRole::ALL
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("Unknown design role: {}", s))
    }
}

// =============================================================================
// Tests
// =============================================================================
