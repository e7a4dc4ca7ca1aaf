//! Model error types

use std::io;

use thiserror::Error;

/// Errors raised while building, training or sampling a language model.
#[derive(Debug, Error)]
pub enum ModelError {
	#[error("window length must be positive, got {0}")]
	InvalidWindowLength(usize),

	#[error("initial text shorter than window length ({text_length} < {window_length})")]
	InitialTextTooShort { text_length: usize, window_length: usize },

	#[error("window length mismatch: expected {expected}, found {found}")]
	WindowLengthMismatch { expected: usize, found: usize },

	/// A distribution reached normalization without any count.
	/// Training never creates such a distribution.
	#[error("context {0:?} has a zero total count")]
	ZeroTotalCount(String),

	#[error("failed to read training source: {0}")]
	Io(#[from] io::Error),
}

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_model_error_display() {
		let err = ModelError::InvalidWindowLength(0);
		assert!(format!("{}", err).contains("window length must be positive"));

		let err = ModelError::InitialTextTooShort { text_length: 2, window_length: 3 };
		assert_eq!(
			format!("{}", err),
			"initial text shorter than window length (2 < 3)"
		);

		let err = ModelError::ZeroTotalCount("abc".to_owned());
		assert!(format!("{}", err).contains("\"abc\""));

		let err = ModelError::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
		assert!(format!("{}", err).contains("missing"));
	}
}
