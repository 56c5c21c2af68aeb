//! Gesture normalization for terminal hosts.
//!
//! Turns raw crossterm mouse events into [`ScrollEvent`]s. One terminal
//! row counts as one pixel.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::gesture::ScrollEvent;

/// Tracks a left-button press on the knob across mouse events.
#[derive(Debug, Default)]
pub struct GestureNormalizer {
    /// Row of the last press or drag event while a drag is in progress.
    last_row: Option<u16>,
}

impl GestureNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.last_row.is_some()
    }

    /// Normalize one mouse event.
    ///
    /// `on_knob` tells whether the event position is over the knob; only a
    /// press on the knob starts a drag. Once started, moves and the release
    /// are reported wherever the pointer is.
    pub fn normalize(&mut self, event: &MouseEvent, on_knob: bool) -> Vec<ScrollEvent> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) if on_knob => {
                self.last_row = Some(event.row);
                vec![ScrollEvent::PointerDown, ScrollEvent::DragStart]
            }
            MouseEventKind::Drag(MouseButton::Left) => match self.last_row {
                Some(last) => {
                    self.last_row = Some(event.row);
                    let px_delta_y = f64::from(event.row) - f64::from(last);
                    if px_delta_y == 0.0 {
                        Vec::new()
                    } else {
                        vec![ScrollEvent::DragMove { px_delta_y }]
                    }
                }
                None => Vec::new(),
            },
            MouseEventKind::Up(MouseButton::Left) => match self.last_row.take() {
                Some(_) => vec![ScrollEvent::DragEnd],
                None => Vec::new(),
            },
            MouseEventKind::ScrollUp => vec![ScrollEvent::Wheel { delta_units: 1.0 }],
            MouseEventKind::ScrollDown => vec![ScrollEvent::Wheel { delta_units: -1.0 }],
            _ => Vec::new(),
        }
    }
}
