//! Custom vertical scrollbar driven by drag gestures and wheel input.
//!
//! The widget replaces a native scrollbar for an outer (clipped) container
//! holding an inner content element. Hosts provide the document through the
//! [`Dom`] trait and feed normalized gesture signals to [`Scrollbars`].

pub mod controller;
pub mod dom;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod input;
pub mod mapper;
pub mod options;
pub mod state;
pub mod style;

pub use controller::Scrollbars;
pub use dom::{Dom, Target};
pub use error::AttachError;
pub use geometry::Geometry;
pub use gesture::{EventResult, ScrollEvent};
pub use input::GestureNormalizer;
pub use mapper::Mapped;
pub use options::{Options, PositionKey, ScrollConfig};
pub use state::{DragPhase, ElementRefs, WidgetState};
pub use style::StyleRegistry;
