//! Mapping between content offsets and knob offsets.

/// A content offset and the knob offset that mirrors it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mapped {
    pub content_top_px: f64,
    pub knob_top_px: f64,
}

impl Mapped {
    /// Clamp `content_top_px` into `[0, max_scroll_px]` and derive the knob offset.
    /// A negative maximum clamps everything to 0.
    pub fn at(content_top_px: f64, height_ratio: f64, max_scroll_px: f64) -> Self {
        let max = if max_scroll_px.is_finite() {
            max_scroll_px.max(0.0)
        } else {
            0.0
        };
        let content_top_px = if content_top_px.is_nan() {
            0.0
        } else {
            content_top_px.clamp(0.0, max)
        };
        let knob_top_px = if usable_ratio(height_ratio) {
            content_top_px * height_ratio
        } else {
            0.0
        };
        Self {
            content_top_px,
            knob_top_px,
        }
    }
}

fn usable_ratio(height_ratio: f64) -> bool {
    height_ratio.is_finite() && height_ratio > 0.0
}

/// Move the content by a knob-space delta.
///
/// The delta is scaled into content space by dividing by the height ratio.
/// A ratio that cannot be divided by leaves the offset where it was.
pub fn map_delta(
    current_content_top_px: f64,
    px_delta_y: f64,
    height_ratio: f64,
    max_scroll_px: f64,
) -> Mapped {
    let candidate = if usable_ratio(height_ratio) && px_delta_y.is_finite() {
        current_content_top_px + px_delta_y / height_ratio
    } else {
        current_content_top_px
    };
    Mapped::at(candidate, height_ratio, max_scroll_px)
}

/// Move the content by a normalized wheel delta.
///
/// Positive units scroll toward the top; each unit moves `scroll_ratio`
/// content pixels regardless of the height ratio.
pub fn map_wheel(
    current_content_top_px: f64,
    delta_units: f64,
    scroll_ratio: f64,
    height_ratio: f64,
    max_scroll_px: f64,
) -> Mapped {
    let content_delta = -delta_units * scroll_ratio;
    let candidate = if content_delta.is_finite() {
        current_content_top_px + content_delta
    } else {
        current_content_top_px
    };
    Mapped::at(candidate, height_ratio, max_scroll_px)
}
