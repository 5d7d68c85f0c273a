//! Demonstrates minting a shared access signature for a messaging namespace resource and
//! inspecting its expiry.

// crates.io
use color_eyre::Result;
use url::Url;
// self
use sas_minter::{
	builder::TokenBuilder,
	credential::{KeyName, KeySecret},
};

fn main() -> Result<()> {
	color_eyre::install()?;

	let builder = TokenBuilder::new(
		KeyName::new("RootManageSharedAccessKey")?,
		KeySecret::new("super-secret-signing-key"),
	);
	let resource = Url::parse("https://contoso.servicebus.windows.net/notification-hub")?;
	let token = builder.generate(&resource)?;

	println!("Authorization: {}", token.as_str());
	println!("Expires at: {}.", token.expires_at());

	Ok(())
}
