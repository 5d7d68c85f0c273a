//! Rendered token value and its expiry helpers.

// self
use crate::_prelude::*;

/// Immutable SAS token produced by [`TokenBuilder`](crate::builder::TokenBuilder).
///
/// The rendered string is the exact wire layout consumed by external verifiers and must not
/// be reassembled field by field:
///
/// ```text
/// SharedAccessSignature sr=<canonical-uri>&sig=<signature>&se=<epoch-seconds>&skn=<key-name>
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SasToken {
	rendered: String,
	expires_at: OffsetDateTime,
}
impl SasToken {
	pub(crate) fn new(rendered: String, expires_at: OffsetDateTime) -> Self {
		Self { rendered, expires_at }
	}

	/// Returns the rendered token. The value is a bearer credential; callers must avoid
	/// logging it.
	pub fn as_str(&self) -> &str {
		&self.rendered
	}

	/// Consumes the token and returns the rendered string.
	pub fn into_string(self) -> String {
		self.rendered
	}

	/// Expiry instant the token was stamped with, truncated to whole seconds.
	pub fn expires_at(&self) -> OffsetDateTime {
		self.expires_at
	}

	/// Returns `true` if the token has expired at the provided instant.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		instant >= self.expires_at
	}

	/// Convenience helper that checks expiry against the current UTC instant.
	pub fn is_expired(&self) -> bool {
		self.is_expired_at(OffsetDateTime::now_utc())
	}
}
impl AsRef<str> for SasToken {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}
impl Debug for SasToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SasToken")
			.field("rendered", &"<redacted>")
			.field("expires_at", &self.expires_at)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn token_formatters_redact_the_credential() {
		let expires_at = macros::datetime!(2026-08-23 13:00 UTC);
		let token = SasToken::new("SharedAccessSignature sr=x&sig=y&se=0&skn=z".into(), expires_at);

		assert!(format!("{token:?}").contains("<redacted>"));
		assert!(!format!("{token:?}").contains("sig=y"));
	}

	#[test]
	fn expiry_helpers_compare_against_the_stamped_instant() {
		let expires_at = macros::datetime!(2026-08-23 13:00 UTC);
		let token = SasToken::new(String::new(), expires_at);

		assert!(!token.is_expired_at(expires_at - Duration::seconds(1)));
		assert!(token.is_expired_at(expires_at));
		assert!(token.is_expired_at(expires_at + Duration::seconds(1)));
	}
}
