//! Core value types for design-tool scene nodes.

/// Auto-layout direction of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    Horizontal,
    Vertical,
}

impl LayoutMode {
    /// Parse a `layoutMode` token. `NONE` and unrecognized tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "HORIZONTAL" => Some(Self::Horizontal),
            "VERTICAL" => Some(Self::Vertical),
            _ => None,
        }
    }
}

/// Wrapping behaviour of a frame's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutWrap {
    Wrap,
    #[default]
    NoWrap,
}

impl LayoutWrap {
    /// Anything other than `WRAP` (including absence) means no wrapping.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("WRAP") => Self::Wrap,
            _ => Self::NoWrap,
        }
    }
}

/// Distribution of children along the primary axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimaryAxisAlign {
    Min,
    Center,
    Max,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl PrimaryAxisAlign {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "MIN" => Some(Self::Min),
            "CENTER" => Some(Self::Center),
            "MAX" => Some(Self::Max),
            "SPACE_BETWEEN" => Some(Self::SpaceBetween),
            "SPACE_AROUND" => Some(Self::SpaceAround),
            "SPACE_EVENLY" => Some(Self::SpaceEvenly),
            _ => None,
        }
    }
}

/// Alignment of children on the counter axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterAxisAlign {
    Min,
    Center,
    Max,
    Baseline,
    Stretch,
}

impl CounterAxisAlign {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "MIN" => Some(Self::Min),
            "CENTER" => Some(Self::Center),
            "MAX" => Some(Self::Max),
            "BASELINE" => Some(Self::Baseline),
            "STRETCH" => Some(Self::Stretch),
            _ => None,
        }
    }
}

/// Sizing mode along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sizing {
    /// Grow to fill the available space
    Fill,
    /// Shrink to content
    Hug,
    /// Use the exact pixel dimension
    Fixed,
}

impl Sizing {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "FILL" => Some(Self::Fill),
            "HUG" => Some(Self::Hug),
            "FIXED" => Some(Self::Fixed),
            _ => None,
        }
    }
}

/// Padding on all sides. Absent sides are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub top: Option<f64>,
    pub bottom: Option<f64>,
    pub left: Option<f64>,
    pub right: Option<f64>,
}

impl Padding {
    /// Create uniform padding.
    pub fn uniform(value: f64) -> Self {
        Self {
            top: Some(value),
            bottom: Some(value),
            left: Some(value),
            right: Some(value),
        }
    }
}

/// A color with channels normalized to `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Convert to 8-bit channels, rounding half away from zero.
    pub fn to_rgb8(&self) -> Rgb8 {
        Rgb8 {
            r: channel_to_u8(self.r),
            g: channel_to_u8(self.g),
            b: channel_to_u8(self.b),
        }
    }

    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
}

fn channel_to_u8(channel: f64) -> u8 {
    if !channel.is_finite() {
        return 0;
    }
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

/// A color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A paint applied to a frame's background.
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    /// Paint type token (`SOLID`, `GRADIENT_LINEAR`, `IMAGE`, ...)
    pub kind: String,
    pub visible: bool,
    pub color: Option<Rgb>,
}

impl Fill {
    /// A visible solid fill.
    pub fn solid(color: Rgb) -> Self {
        Self {
            kind: "SOLID".to_string(),
            visible: true,
            color: Some(color),
        }
    }

    /// Whether this fill is a visible solid color.
    pub fn is_visible_solid(&self) -> bool {
        self.kind == "SOLID" && self.visible && self.color.is_some()
    }
}

/// Unit of a text line height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineHeightUnit {
    Pixels,
    Percent,
    Auto,
}

impl LineHeightUnit {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "PIXELS" => Some(Self::Pixels),
            "PERCENT" => Some(Self::Percent),
            "AUTO" => Some(Self::Auto),
            _ => None,
        }
    }
}

/// Line height of a text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineHeight {
    pub unit: Option<LineHeightUnit>,
    pub value: Option<f64>,
}

impl LineHeight {
    pub fn px(value: f64) -> Self {
        Self {
            unit: Some(LineHeightUnit::Pixels),
            value: Some(value),
        }
    }

    /// The pixel value, if this line height is expressed in pixels.
    pub fn pixels(&self) -> Option<f64> {
        match self.unit {
            Some(LineHeightUnit::Pixels) => self.value,
            _ => None,
        }
    }
}
