//! The single failure mode exposed by the minting pipeline.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`TokenGenerationError`] by default.
pub type Result<T, E = TokenGenerationError> = std::result::Result<T, E>;

type BoxError = Box<dyn StdError + Send + Sync>;

/// Encoding or cryptographic failure raised while minting a token.
///
/// There is exactly one failure class: URI parsing, character encoding, and HMAC key
/// initialization problems all abort the call and surface here. No partial token is ever
/// returned and no failure is retried locally.
#[derive(Debug, ThisError)]
#[error("Failed to mint the shared access signature.")]
pub struct TokenGenerationError {
	#[source]
	source: BoxError,
}
impl TokenGenerationError {
	/// Wraps an underlying encoding or cryptographic failure.
	pub fn new(src: impl 'static + Send + Sync + StdError) -> Self {
		Self { source: Box::new(src) }
	}
}
impl From<url::ParseError> for TokenGenerationError {
	fn from(e: url::ParseError) -> Self {
		Self::new(e)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn error_preserves_its_source() {
		let error = TokenGenerationError::from(url::ParseError::EmptyHost);

		assert!(error.source.to_string().contains("empty host"));
		assert_eq!(error.to_string(), "Failed to mint the shared access signature.");
	}
}
