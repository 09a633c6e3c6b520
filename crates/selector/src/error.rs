//! Error types for selector construction.
//!
//! Both variants describe a malformed construction sequence. They are raised
//! before the builder is touched, so a rejected fragment never shows up in the
//! rendered text.

use thiserror::Error;

use crate::fragment::FragmentKind;

/// Errors that can occur while appending fragments to a [`SelectorBuilder`].
///
/// The display messages are fixed and identical for every offending kind; the
/// `kind` field tells callers which fragment was rejected.
///
/// # Examples
///
/// ```rust
/// use selector::{FragmentKind, SelectorError};
///
/// let err = selector::id("main").id("other").unwrap_err();
/// assert_eq!(err, SelectorError::DuplicateFragment { kind: FragmentKind::Id });
/// ```
///
/// [`SelectorBuilder`]: crate::SelectorBuilder
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    /// An element, id or pseudo-element was appended a second time.
    #[error("Element, id and pseudo-element should not occur more then one time inside the selector")]
    DuplicateFragment { kind: FragmentKind },

    /// A fragment was appended after a fragment of a higher-ranked kind.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OrderViolation { kind: FragmentKind },
}

impl SelectorError {
    /// The kind of the fragment that was rejected.
    pub fn kind(&self) -> FragmentKind {
        match self {
            SelectorError::DuplicateFragment { kind } | SelectorError::OrderViolation { kind } => {
                *kind
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SelectorError>;
