pub mod document;
pub mod element;
pub mod error;
pub mod selector;

pub use document::{Document, NodeId};
pub use element::Element;
pub use error::DomError;
pub use selector::Selector;
