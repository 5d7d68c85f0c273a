//! Signing key material: validated key names and redacted key secrets.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

const KEY_NAME_MAX_LEN: usize = 128;

/// Error returned when key-name validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum KeyNameError {
	/// The key name was empty.
	#[error("Key name cannot be empty.")]
	Empty,
	/// The key name contains whitespace characters.
	#[error("Key name contains whitespace.")]
	ContainsWhitespace,
	/// The key name exceeded the allowed character count.
	#[error("Key name exceeds {max} characters.")]
	TooLong {
		/// Maximum permitted character count.
		max: usize,
	},
}

/// Opaque identifier naming which shared access key signed a token.
///
/// The value is embedded verbatim in the rendered token's `skn` field, so it is validated at
/// construction instead of being escaped later.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct KeyName(String);
impl KeyName {
	/// Creates a new key name after validation.
	pub fn new(value: impl AsRef<str>) -> Result<Self, KeyNameError> {
		let view = value.as_ref();

		validate_view(view)?;

		Ok(Self(view.to_owned()))
	}
}
impl Deref for KeyName {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for KeyName {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl From<KeyName> for String {
	fn from(value: KeyName) -> Self {
		value.0
	}
}
impl TryFrom<String> for KeyName {
	type Error = KeyNameError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		validate_view(&value)?;

		Ok(Self(value))
	}
}
impl Borrow<str> for KeyName {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl Debug for KeyName {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "KeyName({})", self.0)
	}
}
impl Display for KeyName {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
impl FromStr for KeyName {
	type Err = KeyNameError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

fn validate_view(view: &str) -> Result<(), KeyNameError> {
	if view.is_empty() {
		return Err(KeyNameError::Empty);
	}
	if view.chars().any(char::is_whitespace) {
		return Err(KeyNameError::ContainsWhitespace);
	}
	if view.len() > KEY_NAME_MAX_LEN {
		return Err(KeyNameError::TooLong { max: KEY_NAME_MAX_LEN });
	}

	Ok(())
}

/// Redacted signing secret wrapper keeping key material out of logs.
///
/// The secret's UTF-8 bytes key the HMAC directly; no Base64 decoding is applied first.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySecret(String);
impl KeySecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner secret value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for KeySecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for KeySecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("KeySecret").field(&"<redacted>").finish()
	}
}
impl Display for KeySecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn key_names_validate() {
		assert_eq!(KeyName::new(""), Err(KeyNameError::Empty));
		assert_eq!(KeyName::new("with space"), Err(KeyNameError::ContainsWhitespace));
		assert_eq!(KeyName::new(" leading"), Err(KeyNameError::ContainsWhitespace));
		assert_eq!(
			KeyName::new("a".repeat(KEY_NAME_MAX_LEN + 1)),
			Err(KeyNameError::TooLong { max: KEY_NAME_MAX_LEN })
		);

		let name = KeyName::new("RootManageSharedAccessKey")
			.expect("Key name fixture should be considered valid.");

		assert_eq!(name.as_ref(), "RootManageSharedAccessKey");
	}

	#[test]
	fn serde_round_trip_enforces_validation() {
		let name: KeyName = serde_json::from_str("\"events-send\"")
			.expect("Key name should deserialize successfully.");

		assert_eq!(name.as_ref(), "events-send");
		assert!(serde_json::from_str::<KeyName>("\"with space\"").is_err());
	}

	#[test]
	fn signing_secret_never_leaks_through_formatters() {
		let raw = "sb-root-key-material-0001";
		let secret = KeySecret::new(raw);
		let debugged = format!("{secret:?}");

		assert!(!debugged.contains(raw));
		assert_eq!(debugged, "KeySecret(\"<redacted>\")");
		assert_eq!(format!("{secret}"), "<redacted>");
		// The HMAC still needs the real bytes.
		assert_eq!(secret.expose(), raw);
	}
}
