use thiserror::Error;

/// Failures resolving the slider's output region.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SliderError {
	/// No global `window` (not running in a browser).
	#[error("no window available")]
	NoWindow,
	/// The window has no document.
	#[error("window has no document")]
	NoDocument,
	/// No element carries the requested id.
	#[error("output region `{0}` not found")]
	RegionNotFound(String),
}
