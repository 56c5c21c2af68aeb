use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tscroll::{GestureNormalizer, ScrollEvent};

fn mouse(kind: MouseEventKind, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column: 79,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_press_on_knob_starts_drag() {
    let mut n = GestureNormalizer::new();

    let events = n.normalize(&mouse(MouseEventKind::Down(MouseButton::Left), 5), true);

    assert_eq!(events, vec![ScrollEvent::PointerDown, ScrollEvent::DragStart]);
    assert!(n.is_dragging());
}

#[test]
fn test_press_off_knob_is_ignored() {
    let mut n = GestureNormalizer::new();

    assert!(n
        .normalize(&mouse(MouseEventKind::Down(MouseButton::Left), 5), false)
        .is_empty());
    assert!(n
        .normalize(&mouse(MouseEventKind::Drag(MouseButton::Left), 8), false)
        .is_empty());
    assert!(n
        .normalize(&mouse(MouseEventKind::Up(MouseButton::Left), 8), false)
        .is_empty());
    assert!(!n.is_dragging());
}

#[test]
fn test_drag_reports_row_deltas() {
    let mut n = GestureNormalizer::new();
    n.normalize(&mouse(MouseEventKind::Down(MouseButton::Left), 5), true);

    assert_eq!(
        n.normalize(&mouse(MouseEventKind::Drag(MouseButton::Left), 8), false),
        vec![ScrollEvent::DragMove { px_delta_y: 3.0 }]
    );
    assert_eq!(
        n.normalize(&mouse(MouseEventKind::Drag(MouseButton::Left), 6), false),
        vec![ScrollEvent::DragMove { px_delta_y: -2.0 }]
    );
    // Same row: nothing moved.
    assert!(n
        .normalize(&mouse(MouseEventKind::Drag(MouseButton::Left), 6), false)
        .is_empty());
}

#[test]
fn test_release_ends_drag() {
    let mut n = GestureNormalizer::new();
    n.normalize(&mouse(MouseEventKind::Down(MouseButton::Left), 5), true);

    assert_eq!(
        n.normalize(&mouse(MouseEventKind::Up(MouseButton::Left), 9), false),
        vec![ScrollEvent::DragEnd]
    );
    assert!(!n.is_dragging());
}

#[test]
fn test_right_button_is_ignored() {
    let mut n = GestureNormalizer::new();
    assert!(n
        .normalize(&mouse(MouseEventKind::Down(MouseButton::Right), 5), true)
        .is_empty());
}

#[test]
fn test_wheel_direction() {
    let mut n = GestureNormalizer::new();
    assert_eq!(
        n.normalize(&mouse(MouseEventKind::ScrollUp, 0), false),
        vec![ScrollEvent::Wheel { delta_units: 1.0 }]
    );
    assert_eq!(
        n.normalize(&mouse(MouseEventKind::ScrollDown, 0), false),
        vec![ScrollEvent::Wheel { delta_units: -1.0 }]
    );
    assert!(n
        .normalize(&mouse(MouseEventKind::ScrollLeft, 0), false)
        .is_empty());
}
