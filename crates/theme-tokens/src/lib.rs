//! Theme token model for Prism Studio
//!
//! This crate defines the canonical token types the engine produces and
//! consumes: color tokens with their design-role assignments, the derived
//! brand palette, and the pass-through typography/icon/business metadata
//! that rides along with generation requests.
//!
//! # Token contract
//!
//! Rendering consumers never see raw [`token::ColorToken`] values — they
//! see the resolved CSS-variable map produced by
//! [`palette::BrandPalette::css_variables`] and
//! [`palette::resolve_variables`], keyed by the fixed role names in
//! [`roles::DesignRole`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod palette;
pub mod roles;
pub mod snapshot;
pub mod token;
pub mod typography;

pub use palette::{
    resolve_variables, BrandColors, BrandPalette, GradientColors, SemanticColors, SurfaceColors,
};
pub use roles::DesignRole;
pub use snapshot::{BusinessDetails, IconRecommendation, ThemeSnapshot};
pub use token::{ColorToken, MainColorType, TokenCategory};
pub use typography::{FontRecommendation, FontSelection};
