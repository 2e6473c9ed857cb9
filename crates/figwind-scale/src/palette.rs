//! Background color matching against a fixed palette.

use figwind_core::Rgb8;

/// Maximum per-channel difference for a palette match.
pub const COLOR_TOLERANCE: u8 = 2;

/// A named palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Utility class emitted on a match
    pub class: &'static str,
    pub rgb: Rgb8,
}

const STANDARD_ENTRIES: &[PaletteEntry] = &[
    PaletteEntry { class: "bg-white", rgb: Rgb8::new(255, 255, 255) },
    PaletteEntry { class: "bg-gray-100", rgb: Rgb8::new(245, 245, 245) },
    PaletteEntry { class: "bg-gray-200", rgb: Rgb8::new(229, 229, 229) },
    PaletteEntry { class: "bg-gray-300", rgb: Rgb8::new(209, 213, 219) },
    PaletteEntry { class: "bg-gray-400", rgb: Rgb8::new(156, 163, 175) },
    PaletteEntry { class: "bg-black", rgb: Rgb8::new(0, 0, 0) },
];

static STANDARD: Palette = Palette::new(STANDARD_ENTRIES);

/// An ordered palette. Matching is first-within-tolerance, so declaration
/// order decides between overlapping entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    entries: &'static [PaletteEntry],
}

/// Outcome of matching a color against a palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorUtility {
    /// A palette class such as `bg-gray-200`
    Class(&'static str),
    /// No palette entry matched; the literal color
    Literal(Rgb8),
}

impl ColorUtility {
    pub fn class(&self) -> Option<&'static str> {
        match self {
            ColorUtility::Class(class) => Some(class),
            ColorUtility::Literal(_) => None,
        }
    }

    /// CSS value for the literal fallback, e.g. `rgb(12,34,56)`.
    pub fn literal_css(&self) -> Option<String> {
        match self {
            ColorUtility::Class(_) => None,
            ColorUtility::Literal(rgb) => Some(format!("rgb({},{},{})", rgb.r, rgb.g, rgb.b)),
        }
    }
}

impl Palette {
    pub const fn new(entries: &'static [PaletteEntry]) -> Self {
        Self { entries }
    }

    pub fn standard() -> &'static Palette {
        &STANDARD
    }

    pub fn entries(&self) -> &'static [PaletteEntry] {
        self.entries
    }

    /// Match a color: the first entry within [`COLOR_TOLERANCE`] on every channel.
    pub fn match_color(&self, rgb: Rgb8) -> ColorUtility {
        self.entries
            .iter()
            .find(|entry| within_tolerance(entry.rgb, rgb))
            .map(|entry| ColorUtility::Class(entry.class))
            .unwrap_or(ColorUtility::Literal(rgb))
    }
}

impl Default for Palette {
    fn default() -> Self {
        STANDARD
    }
}

fn within_tolerance(a: Rgb8, b: Rgb8) -> bool {
    a.r.abs_diff(b.r) <= COLOR_TOLERANCE
        && a.g.abs_diff(b.g) <= COLOR_TOLERANCE
        && a.b.abs_diff(b.b) <= COLOR_TOLERANCE
}

/// Match a color against the standard palette.
pub fn color_to_utility(rgb: Rgb8) -> ColorUtility {
    Palette::standard().match_color(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figwind_core::Rgb;

    #[test]
    fn test_white_exact() {
        assert_eq!(color_to_utility(Rgb::WHITE.to_rgb8()), ColorUtility::Class("bg-white"));
    }

    #[test]
    fn test_near_white_within_tolerance() {
        let rgb = Rgb::new(0.999, 0.999, 0.999).to_rgb8();
        assert_eq!(color_to_utility(rgb).class(), Some("bg-white"));
        assert_eq!(color_to_utility(Rgb8::new(253, 254, 255)).class(), Some("bg-white"));
    }

    #[test]
    fn test_light_gray() {
        let rgb = Rgb::new(0.9, 0.9, 0.9).to_rgb8();
        assert_eq!(color_to_utility(rgb).class(), Some("bg-gray-200"));
    }

    #[test]
    fn test_literal_fallback() {
        let result = color_to_utility(Rgb8::new(59, 130, 246));
        assert_eq!(result.class(), None);
        assert_eq!(result.literal_css().as_deref(), Some("rgb(59,130,246)"));
    }

    #[test]
    fn test_tolerance_is_per_channel() {
        assert_eq!(color_to_utility(Rgb8::new(255, 255, 252)).class(), None);
    }

    #[test]
    fn test_declaration_order_breaks_overlap() {
        const OVERLAPPING: &[PaletteEntry] = &[
            PaletteEntry { class: "bg-first", rgb: Rgb8::new(100, 100, 100) },
            PaletteEntry { class: "bg-second", rgb: Rgb8::new(101, 101, 101) },
        ];
        let palette = Palette::new(OVERLAPPING);
        assert_eq!(palette.match_color(Rgb8::new(101, 101, 101)).class(), Some("bg-first"));
        assert_eq!(palette.match_color(Rgb8::new(103, 103, 103)).class(), Some("bg-second"));
    }
}
