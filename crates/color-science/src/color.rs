//! Hex color parsing and channel-level manipulation
//!
//! Colors travel through the engine as `#RRGGBB` strings; this module is
//! the single place they are taken apart into channels and put back
//! together. Parsing is lenient (optional `#`, 3-digit shorthand, trailing
//! alpha ignored) and total: malformed input yields `None`, never a panic.

use serde::{Deserialize, Serialize};

// =============================================================================
// RGB Type
// =============================================================================

/// A color split into 8-bit sRGB channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create an RGB value from channels
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

// =============================================================================
// Parsing and Formatting
// =============================================================================

/// Parse a hex color string into RGB channels
///
/// Accepts an optional leading `#`, 3-digit shorthand (expanded digit by
/// digit, so `#1AF` reads as `#11AAFF`), and 6-digit form. Extra trailing
/// characters (an alpha suffix) are ignored. Returns `None` on anything
/// else; callers must handle the miss.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let hex = hex.trim().trim_start_matches('#');

    let expanded;
    let hex = if hex.len() == 3 {
        expanded = hex
            .chars()
            .flat_map(|c| [c, c])
            .collect::<String>();
        expanded.as_str()
    } else {
        hex
    };

    if hex.len() < 6 {
        return None;
    }

    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some(Rgb::new(r, g, b))
}

/// Format RGB channels as an uppercase `#RRGGBB` string
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

// =============================================================================
// Channel Arithmetic
// =============================================================================

/// Lighten or darken a color by adding `delta` to every channel
///
/// Channels clamp to `[0, 255]`. Malformed input is returned unchanged so
/// palette derivation never has to branch on parse failures.
pub fn adjust_brightness(hex: &str, delta: i32) -> String {
    match hex_to_rgb(hex) {
        Some(rgb) => rgb_to_hex(Rgb::new(
            (rgb.r as i32 + delta).clamp(0, 255) as u8,
            (rgb.g as i32 + delta).clamp(0, 255) as u8,
            (rgb.b as i32 + delta).clamp(0, 255) as u8,
        )),
        None => hex.to_string(),
    }
}

/// Linearly interpolate between two colors
///
/// Each channel is `round(a * (1 - weight) + b * weight)` with `weight`
/// clamped to `[0, 1]`: weight 0 yields `a`, weight 1 yields `b`. If either
/// color fails to parse the other is returned; if both fail, `a` comes back
/// unchanged.
pub fn blend(a: &str, b: &str, weight: f64) -> String {
    let weight = weight.clamp(0.0, 1.0);

    match (hex_to_rgb(a), hex_to_rgb(b)) {
        (Some(ca), Some(cb)) => {
            let mix = |x: u8, y: u8| -> u8 {
                (x as f64 * (1.0 - weight) + y as f64 * weight).round() as u8
            };
            rgb_to_hex(Rgb::new(
                mix(ca.r, cb.r),
                mix(ca.g, cb.g),
                mix(ca.b, cb.b),
            ))
        }
        (Some(ca), None) => rgb_to_hex(ca),
        (None, Some(cb)) => rgb_to_hex(cb),
        (None, None) => a.to_string(),
    }
}

// =============================================================================
// Perceived Brightness
// =============================================================================

/// Perceived brightness of a color on the 0-255 scale
///
/// Uses the cheap `0.299R + 0.587G + 0.114B` formula rather than the WCAG
/// luminance in [`crate::contrast`]; this one exists for fast UI-only
/// decisions where gamma correction buys nothing.
pub fn perceived_brightness(rgb: Rgb) -> f64 {
    0.299 * rgb.r as f64 + 0.587 * rgb.g as f64 + 0.114 * rgb.b as f64
}

/// The two overlay poles a color can be paired with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Foreground {
    /// Pure black (`#000000`)
    Black,
    /// Pure white (`#FFFFFF`)
    White,
}

impl Foreground {
    /// The hex value of this pole
    pub fn as_hex(&self) -> &'static str {
        match self {
            Foreground::Black => "#000000",
            Foreground::White => "#FFFFFF",
        }
    }
}

impl std::fmt::Display for Foreground {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Foreground::Black => write!(f, "black"),
            Foreground::White => write!(f, "white"),
        }
    }
}

/// Classify a color against the perceived-brightness midpoint
///
/// Perceived brightness below the 128 cutoff maps to [`Foreground::Black`],
/// at or above maps to [`Foreground::White`]. Malformed input classifies as
/// black.
pub fn foreground_for(hex: &str) -> Foreground {
    match hex_to_rgb(hex) {
        Some(rgb) if perceived_brightness(rgb) >= 128.0 => Foreground::White,
        _ => Foreground::Black,
    }
}

// =============================================================================
// Tests
// =============================================================================
