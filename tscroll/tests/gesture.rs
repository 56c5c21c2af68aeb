use tscroll::style::{ACTIVE_CLASS, NO_SELECT_CLASS};
use tscroll::{DragPhase, EventResult, Options, ScrollEvent, Scrollbars};
use tscroll_dom::{Document, Element, NodeId};

struct Fixture {
    doc: Document,
    bars: Scrollbars<NodeId>,
    outer: NodeId,
    content: NodeId,
    knob: NodeId,
    track: NodeId,
}

fn attached(outer_height: f64, content_height: f64, scroll_top: f64) -> Fixture {
    let mut doc = Document::new();
    let body = doc.body();
    let outer = doc
        .insert(
            body,
            Element::div()
                .id("outer")
                .height(outer_height)
                .scroll_top(scroll_top)
                .child(Element::div().id("content").height(content_height)),
        )
        .unwrap();
    let content = doc.get_element_by_id("content").unwrap();

    let mut bars = Scrollbars::new();
    assert!(bars.attach(&mut doc, outer, content, Options::default()));
    let refs = bars.refs(&outer).unwrap().clone();

    Fixture {
        doc,
        bars,
        outer,
        content,
        knob: refs.knob,
        track: refs.track,
    }
}

impl Fixture {
    fn send(&mut self, target: NodeId, event: ScrollEvent) -> EventResult {
        self.bars.dispatch(&mut self.doc, &target, event)
    }

    fn scroll_top(&self) -> f64 {
        self.doc.scroll_top(self.outer).unwrap()
    }

    fn knob_top(&self) -> f64 {
        self.bars.state(&self.outer).unwrap().knob_top_px
    }

    fn phase(&self) -> DragPhase {
        self.bars.state(&self.outer).unwrap().phase
    }
}

// ============================================================================
// Drag lifecycle
// ============================================================================

#[test]
fn test_drag_start_marks_active() {
    let mut f = attached(100.0, 400.0, 0.0);

    assert_eq!(f.send(f.knob, ScrollEvent::DragStart), EventResult::Consumed);

    assert_eq!(f.phase(), DragPhase::Dragging);
    assert!(f.doc.has_class(f.knob, ACTIVE_CLASS));
    assert!(f.doc.has_class(f.content, NO_SELECT_CLASS));
}

#[test]
fn test_drag_end_clears_markers() {
    let mut f = attached(100.0, 400.0, 0.0);
    f.send(f.knob, ScrollEvent::DragStart);

    assert_eq!(f.send(f.knob, ScrollEvent::DragEnd), EventResult::Consumed);

    assert_eq!(f.phase(), DragPhase::Idle);
    assert!(!f.doc.has_class(f.knob, ACTIVE_CLASS));
    assert!(!f.doc.has_class(f.content, NO_SELECT_CLASS));
    // The knob keeps its own non-selectable class from the markup.
    assert!(f.doc.has_class(f.knob, NO_SELECT_CLASS));
}

#[test]
fn test_drag_move_maps_knob_delta_to_content() {
    let mut f = attached(100.0, 400.0, 100.0);
    f.send(f.knob, ScrollEvent::DragStart);

    let result = f.send(f.knob, ScrollEvent::DragMove { px_delta_y: 40.0 });

    assert_eq!(result, EventResult::Consumed);
    assert_eq!(f.scroll_top(), 260.0);
    assert_eq!(f.knob_top(), 65.0);
    assert_eq!(f.doc.style(f.knob, "top"), Some("65px"));
    assert_eq!(f.doc.style(f.track, "top"), Some("260px"));
    assert_eq!(f.doc.style(f.track, "bottom"), Some("-260px"));
    assert_eq!(f.phase(), DragPhase::Dragging);
}

#[test]
fn test_drag_move_accumulates_from_current_offset() {
    let mut f = attached(100.0, 400.0, 0.0);
    f.send(f.knob, ScrollEvent::DragStart);

    for _ in 0..4 {
        f.send(f.knob, ScrollEvent::DragMove { px_delta_y: 5.0 });
    }
    assert_eq!(f.scroll_top(), 80.0);

    // A host scroll between moves is picked up.
    f.doc.set_scroll_top(f.outer, 200.0).unwrap();
    f.send(f.knob, ScrollEvent::DragMove { px_delta_y: -10.0 });
    assert_eq!(f.scroll_top(), 160.0);
    assert_eq!(f.knob_top(), 40.0);
}

#[test]
fn test_drag_move_clamps_at_both_ends() {
    let mut f = attached(100.0, 400.0, 0.0);
    f.send(f.knob, ScrollEvent::DragStart);

    f.send(f.knob, ScrollEvent::DragMove { px_delta_y: 500.0 });
    assert_eq!(f.scroll_top(), 300.0);
    assert_eq!(f.knob_top(), 75.0);

    f.send(f.knob, ScrollEvent::DragMove { px_delta_y: -500.0 });
    assert_eq!(f.scroll_top(), 0.0);
    assert_eq!(f.knob_top(), 0.0);
}

#[test]
fn test_pointer_down_is_consumed_without_side_effects() {
    let mut f = attached(100.0, 400.0, 40.0);
    let before = f.doc.clone();

    assert_eq!(f.send(f.knob, ScrollEvent::PointerDown), EventResult::Consumed);

    assert_eq!(f.phase(), DragPhase::Idle);
    assert_eq!(f.doc.classes(f.knob), before.classes(f.knob));
    assert_eq!(f.doc.style(f.knob, "top"), before.style(f.knob, "top"));
    assert_eq!(f.scroll_top(), 40.0);
}

// ============================================================================
// Wheel
// ============================================================================

#[test]
fn test_wheel_up_at_top_stays_put() {
    let mut f = attached(100.0, 400.0, 0.0);

    let result = f.send(f.outer, ScrollEvent::Wheel { delta_units: 1.0 });

    assert_eq!(result, EventResult::Consumed);
    assert_eq!(f.scroll_top(), 0.0);
    assert_eq!(f.knob_top(), 0.0);
}

#[test]
fn test_wheel_scrolls_by_ratio() {
    let mut f = attached(100.0, 400.0, 0.0);

    f.send(f.outer, ScrollEvent::Wheel { delta_units: -1.0 });
    assert_eq!(f.scroll_top(), 24.0);
    assert_eq!(f.knob_top(), 6.0);
    assert_eq!(f.doc.style(f.knob, "top"), Some("6px"));
    assert_eq!(f.doc.style(f.track, "top"), Some("24px"));

    f.send(f.outer, ScrollEvent::Wheel { delta_units: -3.0 });
    assert_eq!(f.scroll_top(), 96.0);

    f.send(f.outer, ScrollEvent::Wheel { delta_units: 1.0 });
    assert_eq!(f.scroll_top(), 72.0);
}

#[test]
fn test_wheel_independent_of_drag_phase() {
    let mut f = attached(100.0, 400.0, 0.0);
    f.send(f.knob, ScrollEvent::DragStart);

    f.send(f.outer, ScrollEvent::Wheel { delta_units: -1.0 });

    assert_eq!(f.scroll_top(), 24.0);
    assert_eq!(f.phase(), DragPhase::Dragging);
}

#[test]
fn test_wheel_clamps_at_bottom() {
    let mut f = attached(100.0, 400.0, 290.0);
    f.send(f.outer, ScrollEvent::Wheel { delta_units: -1.0 });
    assert_eq!(f.scroll_top(), 300.0);
}

#[test]
fn test_wheel_on_knob_is_ignored() {
    let mut f = attached(100.0, 400.0, 0.0);
    assert_eq!(
        f.send(f.knob, ScrollEvent::Wheel { delta_units: -1.0 }),
        EventResult::Ignored
    );
    assert_eq!(f.scroll_top(), 0.0);
}

// ============================================================================
// Hidden scrollbar
// ============================================================================

#[test]
fn test_short_content_never_scrolls() {
    let mut f = attached(500.0, 300.0, 0.0);

    f.send(f.outer, ScrollEvent::Wheel { delta_units: -5.0 });
    assert_eq!(f.scroll_top(), 0.0);

    f.send(f.knob, ScrollEvent::DragStart);
    f.send(f.knob, ScrollEvent::DragMove { px_delta_y: 50.0 });
    assert_eq!(f.scroll_top(), 0.0);
    assert_eq!(f.knob_top(), 0.0);
    assert!(f.doc.is_hidden(f.track));
}

#[test]
fn test_empty_content_never_scrolls() {
    let mut f = attached(100.0, 0.0, 0.0);

    f.send(f.outer, ScrollEvent::Wheel { delta_units: -1.0 });
    f.send(f.knob, ScrollEvent::DragMove { px_delta_y: 10.0 });

    assert_eq!(f.scroll_top(), 0.0);
    assert!(f.knob_top().is_finite());
}

// ============================================================================
// Unbound targets
// ============================================================================

#[test]
fn test_unbound_targets_are_ignored() {
    let mut f = attached(100.0, 400.0, 0.0);
    let content = f.content;

    for event in [
        ScrollEvent::PointerDown,
        ScrollEvent::DragStart,
        ScrollEvent::DragMove { px_delta_y: 40.0 },
        ScrollEvent::DragEnd,
    ] {
        assert_eq!(f.send(content, event), EventResult::Ignored);
    }
    assert_eq!(
        f.send(content, ScrollEvent::Wheel { delta_units: -1.0 }),
        EventResult::Ignored
    );

    assert_eq!(f.scroll_top(), 0.0);
    assert!(!f.doc.has_class(content, NO_SELECT_CLASS));
    assert_eq!(f.phase(), DragPhase::Idle);
}

#[test]
fn test_signals_without_any_scrollbar_touch_nothing() {
    let mut doc = Document::new();
    let body = doc.body();
    let node = doc
        .insert(body, Element::div().height(100.0).scroll_top(10.0))
        .unwrap();
    let mut bars: Scrollbars<NodeId> = Scrollbars::new();

    assert_eq!(bars.drag_start(&mut doc, &node), EventResult::Ignored);
    assert_eq!(bars.drag_move(&mut doc, &node, 5.0), EventResult::Ignored);
    assert_eq!(bars.drag_end(&mut doc, &node), EventResult::Ignored);
    assert_eq!(bars.pointer_down(&mut doc, &node), EventResult::Ignored);
    assert_eq!(bars.wheel(&mut doc, &node, 1.0), EventResult::Ignored);

    assert_eq!(doc.scroll_top(node), Some(10.0));
    assert!(doc.classes(node).is_empty());
    assert_eq!(doc.style(node, "top"), None);
}
