//! Scrollbar geometry from element measurements.

/// Result of measuring an outer/content pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Visible height over content height. Also the scale factor from
    /// content-space pixels to knob-space pixels.
    pub height_ratio: f64,
    /// Largest valid scroll offset. Negative when the content is shorter
    /// than the viewport, meaning nothing can scroll.
    pub max_scroll_px: f64,
    pub knob_top_px: f64,
    pub knob_height_px: f64,
    /// Whether the track and knob should be shown.
    pub visible: bool,
}

impl Geometry {
    /// Measure geometry for the current scroll offset.
    ///
    /// A content height of zero (or anything non-finite or negative) has
    /// nothing to scroll: the ratio is pinned to 1 and the track is hidden.
    pub fn compute(outer_height_px: f64, content_height_px: f64, scroll_top_px: f64) -> Self {
        let outer = sanitize(outer_height_px);

        if !(content_height_px.is_finite() && content_height_px > 0.0) {
            return Self::hidden(1.0, -outer);
        }

        let height_ratio = outer / content_height_px;
        let max_scroll_px = content_height_px - outer;

        if height_ratio > 1.0 {
            return Self::hidden(height_ratio, max_scroll_px);
        }

        Self {
            height_ratio,
            max_scroll_px,
            knob_top_px: sanitize(scroll_top_px) * height_ratio,
            knob_height_px: (height_ratio * outer).floor(),
            visible: true,
        }
    }

    fn hidden(height_ratio: f64, max_scroll_px: f64) -> Self {
        Self {
            height_ratio,
            max_scroll_px,
            knob_top_px: 0.0,
            knob_height_px: 0.0,
            visible: false,
        }
    }

    /// Whether any scrolling is possible.
    pub fn can_scroll(&self) -> bool {
        self.visible && self.max_scroll_px > 0.0
    }
}

fn sanitize(px: f64) -> f64 {
    if px.is_finite() { px.max(0.0) } else { 0.0 }
}
