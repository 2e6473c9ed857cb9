//! Spacing scale lookup and the discrete step quantizer.

use crate::number::format_px;

/// Maximum distance, in pixels, at which a scale bucket is used instead of a
/// literal value.
pub const FALLBACK_TOLERANCE_PX: f64 = 2.0;

/// Largest step the discrete quantizer emits as a bare identifier.
const MAX_DISCRETE_STEP: f64 = 96.0;

/// Pixels per discrete step.
const DISCRETE_STEP_PX: f64 = 4.0;

const STANDARD_ENTRIES: &[(u32, f64)] = &[
    (0, 0.0),
    (1, 4.0),
    (2, 8.0),
    (3, 12.0),
    (4, 16.0),
    (5, 20.0),
    (6, 24.0),
    (7, 28.0),
    (8, 32.0),
    (9, 36.0),
    (10, 40.0),
    (11, 44.0),
    (12, 48.0),
    (14, 56.0),
    (16, 64.0),
    (20, 80.0),
    (24, 96.0),
    (28, 112.0),
    (32, 128.0),
    (36, 144.0),
    (40, 160.0),
    (44, 176.0),
    (48, 192.0),
    (52, 208.0),
    (56, 224.0),
    (60, 240.0),
    (64, 256.0),
    (72, 288.0),
    (80, 320.0),
    (96, 384.0),
];

static STANDARD: SpacingScale = SpacingScale::new(STANDARD_ENTRIES);

/// An ordered mapping from bucket key to pixel value.
///
/// Entries must be in ascending pixel order; ties during lookup go to the
/// earlier (smaller) entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingScale {
    entries: &'static [(u32, f64)],
}

/// The result of a nearest-bucket lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleMatch {
    /// Bucket key, used in class names (`w-12`)
    pub key: u32,
    /// Pixel value of the bucket
    pub px: f64,
    /// Absolute distance between the input and the bucket
    pub distance: f64,
}

impl SpacingScale {
    pub const fn new(entries: &'static [(u32, f64)]) -> Self {
        Self { entries }
    }

    /// The standard scale: 0, 4, 8, ... 384 px.
    pub fn standard() -> &'static SpacingScale {
        &STANDARD
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the bucket closest to `px`.
    ///
    /// The first bucket at the minimum distance wins. An input that has no
    /// finite distance to any bucket (NaN, infinities) reports an infinite
    /// distance against the first bucket.
    pub fn nearest(&self, px: f64) -> ScaleMatch {
        let (first_key, first_px) = self.entries.first().copied().unwrap_or((0, 0.0));
        let mut best = ScaleMatch {
            key: first_key,
            px: first_px,
            distance: f64::INFINITY,
        };
        for &(key, bucket_px) in self.entries {
            let distance = (px - bucket_px).abs();
            if distance < best.distance {
                best = ScaleMatch {
                    key,
                    px: bucket_px,
                    distance,
                };
            }
        }
        best
    }

    /// Apply the fallback policy: the nearest bucket, if it is within
    /// [`FALLBACK_TOLERANCE_PX`]. Negative and non-finite inputs never fit.
    pub fn fit(&self, px: f64) -> Option<ScaleMatch> {
        if !px.is_finite() || px < 0.0 {
            return None;
        }
        let found = self.nearest(px);
        (found.distance <= FALLBACK_TOLERANCE_PX).then_some(found)
    }
}

impl Default for SpacingScale {
    fn default() -> Self {
        STANDARD
    }
}

/// Nearest bucket on the standard scale.
pub fn px_to_utility_scale(px: f64) -> ScaleMatch {
    SpacingScale::standard().nearest(px)
}

/// Map a spacing value to a discrete step identifier.
///
/// Multiples of 4 px up to step 96 map to the bare step (`16` -> `"4"`), zero
/// maps to the empty identifier, and everything else (including negative
/// values) maps to an escaped literal such as `"[13px]"`.
pub fn px_to_discrete_step(px: f64) -> String {
    if px == 0.0 {
        return String::new();
    }
    let step = px / DISCRETE_STEP_PX;
    if px > 0.0 && px % DISCRETE_STEP_PX == 0.0 && step <= MAX_DISCRETE_STEP {
        return format_px(step);
    }
    format!("[{}px]", format_px(px))
}

/// Build a spacing class such as `gap-4` or `pt-[13px]`.
///
/// Returns `None` when the value contributes no class: zero or non-finite.
pub fn spacing_class(prefix: &str, px: f64) -> Option<String> {
    if px == 0.0 || !px.is_finite() {
        return None;
    }
    Some(format!("{}-{}", prefix, px_to_discrete_step(px)))
}
