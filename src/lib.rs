//! Mint time-limited Shared Access Signature (SAS) tokens that bind a canonicalized resource
//! URI and an expiry instant to an HMAC-SHA256 signature, rendered in the exact layout
//! external verifiers expect.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod builder;
pub mod credential;
pub mod error;
pub mod obs;
pub mod token;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Result, TokenGenerationError};
}

pub use url;
#[cfg(test)] use {color_eyre as _, serde_json as _};
