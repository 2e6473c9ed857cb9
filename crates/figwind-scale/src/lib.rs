//! Quantization of design values onto a fixed utility-class vocabulary.
//!
//! All functions here are pure. They map a pixel value or a color onto the
//! nearest entry of a fixed scale and report how far off the match is, so the
//! caller can choose between a symbolic class and a literal style.
//!
//! # Fallback policy
//!
//! Widths, heights, font sizes, and line heights use [`SpacingScale::fit`]:
//! a match within [`FALLBACK_TOLERANCE_PX`] becomes a class, anything farther
//! becomes a literal pixel declaration. Gap and padding use the linear
//! [`px_to_discrete_step`] quantizer instead.

mod number;
mod palette;
mod spacing;

pub use number::format_px;
pub use palette::{color_to_utility, ColorUtility, Palette, PaletteEntry, COLOR_TOLERANCE};
pub use spacing::{
    px_to_discrete_step, px_to_utility_scale, spacing_class, ScaleMatch, SpacingScale,
    FALLBACK_TOLERANCE_PX,
};
