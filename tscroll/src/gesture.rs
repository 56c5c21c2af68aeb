//! Gesture handling: drag and wheel signals to scroll positions.

use crate::dom::Dom;
use crate::mapper::{self, Mapped};
use crate::options::ScrollConfig;
use crate::state::{DragPhase, ElementRefs, WidgetState};
use crate::style::{ACTIVE_CLASS, NO_SELECT_CLASS};

/// Normalized input signals.
///
/// Pointer and drag signals target the knob; wheel signals target the
/// outer container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollEvent {
    /// Raw press on the knob. Only suppresses native drag and selection.
    PointerDown,
    DragStart,
    /// Pointer movement since the previous move, in knob-space pixels.
    DragMove { px_delta_y: f64 },
    DragEnd,
    /// Signed wheel amount; positive scrolls the content toward the top.
    Wheel { delta_units: f64 },
}

impl ScrollEvent {
    /// Whether the signal is addressed to the outer container rather than the knob.
    pub fn targets_outer(&self) -> bool {
        matches!(self, Self::Wheel { .. })
    }
}

/// Outcome of dispatching a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Handled. The host should prevent the default action and stop propagation.
    Consumed,
    /// No scrollbar is bound to the target; nothing was touched.
    Ignored,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }
}

/// Apply one signal to a bound instance.
pub(crate) fn handle<D: Dom>(
    dom: &mut D,
    refs: &ElementRefs<D::Node>,
    state: &mut WidgetState,
    event: ScrollEvent,
    config: &ScrollConfig,
) -> EventResult {
    match event {
        ScrollEvent::PointerDown => {}
        ScrollEvent::DragStart => drag_start(dom, refs, state),
        ScrollEvent::DragMove { px_delta_y } => drag_move(dom, refs, state, px_delta_y),
        ScrollEvent::DragEnd => drag_end(dom, refs, state),
        ScrollEvent::Wheel { delta_units } => {
            wheel(dom, refs, state, delta_units, config.scroll_ratio)
        }
    }
    EventResult::Consumed
}

fn drag_start<D: Dom>(dom: &mut D, refs: &ElementRefs<D::Node>, state: &mut WidgetState) {
    log::debug!("[tscroll] drag start on {:?}", refs.knob);
    dom.add_class(&refs.content, NO_SELECT_CLASS);
    dom.add_class(&refs.knob, ACTIVE_CLASS);
    state.phase = DragPhase::Dragging;
}

/// Moves apply in either phase: the gesture layer decides when they are
/// emitted, and attach/refresh use a zero-delta move to reconcile.
pub(crate) fn drag_move<D: Dom>(
    dom: &mut D,
    refs: &ElementRefs<D::Node>,
    state: &mut WidgetState,
    px_delta_y: f64,
) {
    let current = dom.scroll_top(&refs.outer);
    let mapped = mapper::map_delta(current, px_delta_y, state.height_ratio, state.max_scroll_px);
    log::trace!(
        "[tscroll] drag move {px_delta_y} ({:?}): {current} -> {}",
        state.phase,
        mapped.content_top_px
    );
    apply(dom, refs, state, mapped);
}

fn drag_end<D: Dom>(dom: &mut D, refs: &ElementRefs<D::Node>, state: &mut WidgetState) {
    log::debug!("[tscroll] drag end on {:?}", refs.knob);
    dom.remove_class(&refs.content, NO_SELECT_CLASS);
    dom.remove_class(&refs.knob, ACTIVE_CLASS);
    state.phase = DragPhase::Idle;
}

fn wheel<D: Dom>(
    dom: &mut D,
    refs: &ElementRefs<D::Node>,
    state: &mut WidgetState,
    delta_units: f64,
    scroll_ratio: f64,
) {
    let current = dom.scroll_top(&refs.outer);
    let mapped = mapper::map_wheel(
        current,
        delta_units,
        scroll_ratio,
        state.height_ratio,
        state.max_scroll_px,
    );
    log::trace!(
        "[tscroll] wheel {delta_units}: {current} -> {}",
        mapped.content_top_px
    );
    apply(dom, refs, state, mapped);
}

/// Mirror a mapped position into the track, the knob and the outer scroll offset.
fn apply<D: Dom>(dom: &mut D, refs: &ElementRefs<D::Node>, state: &mut WidgetState, mapped: Mapped) {
    // The track lives inside the scrolled container, so it is shifted by
    // the scroll offset to stay pinned to the viewport.
    dom.set_px(&refs.track, "top", mapped.content_top_px);
    dom.set_px(&refs.track, "bottom", -mapped.content_top_px);
    dom.set_px(&refs.knob, "top", mapped.knob_top_px);
    dom.set_scroll_top(&refs.outer, mapped.content_top_px);
    state.knob_top_px = mapped.knob_top_px;
}
