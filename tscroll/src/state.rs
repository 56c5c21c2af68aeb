//! Per-instance scrollbar state.

use crate::geometry::Geometry;

/// Where the knob is in its drag lifecycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Mutable state owned by one attached scrollbar.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WidgetState {
    /// Outer height over content height.
    pub height_ratio: f64,
    /// Largest valid content offset; negative when nothing can scroll.
    pub max_scroll_px: f64,
    /// Knob offset from the top of the track.
    pub knob_top_px: f64,
    /// Whether the track is shown.
    pub visible: bool,
    pub phase: DragPhase,
}

impl WidgetState {
    /// Adopt freshly measured geometry. The drag phase is left alone.
    pub fn apply_geometry(&mut self, geometry: &Geometry) {
        self.height_ratio = geometry.height_ratio;
        self.max_scroll_px = geometry.max_scroll_px;
        self.knob_top_px = geometry.knob_top_px;
        self.visible = geometry.visible;
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }
}

/// Handles to the elements one scrollbar touches.
///
/// The outer and content elements belong to the host; the track, zip and
/// knob are created on attach and removed on re-attach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRefs<N> {
    pub outer: N,
    pub content: N,
    pub track: N,
    pub zip: N,
    pub knob: N,
}
