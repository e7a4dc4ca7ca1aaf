use super::language_model::LanguageModel;
use crate::error::{ModelError, Result};

/// Construction parameters of a `LanguageModel`.
///
/// # Invariants
/// - `build` only succeeds when `window_length >= 1`
/// - Both values are fixed for the lifetime of the built model
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelConfig {
	/// Number of characters in a context window.
	pub window_length: usize,

	/// Optional seed making generation reproducible.
	pub seed: Option<u64>,
}

impl ModelConfig {
	/// Creates a configuration without seed.
	pub fn new(window_length: usize) -> Self {
		Self { window_length, seed: None }
	}

	/// Sets the generation seed.
	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = Some(seed);
		self
	}

	/// Checks the parameters.
	///
	/// # Errors
	/// Returns `InvalidWindowLength` if the window length is 0.
	pub fn validate(&self) -> Result<()> {
		if self.window_length == 0 {
			return Err(ModelError::InvalidWindowLength(self.window_length));
		}
		Ok(())
	}

	/// Builds an empty model from these parameters.
	pub fn build(self) -> Result<LanguageModel> {
		self.validate()?;
		Ok(LanguageModel::from_config(self))
	}
}
