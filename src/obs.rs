//! Optional observability helpers for the minting pipeline.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `sas_minter.mint` with the `stage`
//!   (call site) field, plus a debug event for every minted token.

// self
use crate::_prelude::*;

/// A span builder wrapped around token minting.
#[derive(Clone, Debug)]
pub struct MintSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl MintSpan {
	/// Creates a new span tagged with the provided stage.
	pub fn new(stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("sas_minter.mint", stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = stage;

			Self {}
		}
	}

	/// Enters the span for the duration of the returned guard.
	pub fn entered(self) -> MintSpanGuard {
		#[cfg(feature = "tracing")]
		{
			MintSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			MintSpanGuard {}
		}
	}
}

/// RAII guard returned by [`MintSpan::entered`].
pub struct MintSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for MintSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("MintSpanGuard(..)")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn mint_span_noop_without_tracing() {
		let _guard = MintSpan::new("test").entered();
		// Compile-time smoke test ensures the guard exists even when tracing is disabled.
	}
}
