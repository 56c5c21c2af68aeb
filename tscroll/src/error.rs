//! Attach error types

/// Why an outer/inner pair could not be turned into a scrollbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AttachError {
    /// The outer container matched no element.
    #[error("outer element not found")]
    OuterNotFound,

    /// The outer container matched more than one element.
    #[error("outer element is ambiguous ({0} matches)")]
    OuterAmbiguous(usize),

    /// The inner content matched no element.
    #[error("content element not found")]
    InnerNotFound,

    /// The inner content matched more than one element.
    #[error("content element is ambiguous ({0} matches)")]
    InnerAmbiguous(usize),
}
