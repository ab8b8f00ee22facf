//! Error types for builder construction

use thiserror::Error;

/// Result alias used across this crate.
pub type Result<T> = std::result::Result<T, BuilderError>;

/// Errors raised while constructing builders.
///
/// Rendering never fails: a validly constructed builder tree emits
/// instructions without performing I/O, parsing, or lookups, so the only
/// failure point is construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
	/// The tag name was empty or whitespace-only.
	#[error("invalid tag name: {0:?}")]
	InvalidTagName(String),

	/// The tag is not in the HTML void set and cannot be built as a
	/// [`VoidElement`](crate::VoidElement).
	#[error("not a void tag: {0:?}")]
	NotAVoidTag(String),
}
