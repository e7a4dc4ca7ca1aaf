use log::debug;
use rand::Rng;

use super::distribution::Distribution;
use super::language_model::LanguageModel;
use crate::error::{ModelError, Result};

/// Draws one character from `distribution`.
///
/// A uniform value in `[0, 1)` is taken from `rng` and mapped through the
/// cumulative probabilities of the records, in insertion order.
///
/// Returns `None` if the distribution is empty.
pub fn sample<R: Rng>(distribution: &Distribution, rng: &mut R) -> Option<char> {
	distribution.choose(rng.random::<f64>())
}

/// Generates text by repeatedly sampling the continuation of the trailing
/// window.
///
/// # Parameters
/// - `model`: Trained model; only read.
/// - `initial_text`: Text to start with, at least `window_length` characters.
/// - `target_length`: Length of the returned text, in characters.
/// - `rng`: Random source owned by this call.
///
/// # Returns
/// - `initial_text` unchanged if it already has `target_length` characters.
/// - Otherwise the text extended until it reaches `target_length`, or
///   until its trailing window is not a known context.
///
/// # Errors
/// Returns `InitialTextTooShort` before any lookup if text has to be
/// generated and `initial_text` is shorter than the model window.
pub fn generate<R: Rng>(
	model: &LanguageModel,
	initial_text: &str,
	target_length: usize,
	rng: &mut R,
) -> Result<String> {
	let window_length = model.window_length();
	let mut generated: Vec<char> = initial_text.chars().collect();
	if generated.len() >= target_length {
		return Ok(initial_text.to_owned());
	}
	if generated.len() < window_length {
		return Err(ModelError::InitialTextTooShort {
			text_length: generated.len(),
			window_length,
		});
	}

	while generated.len() < target_length {
		let context: String = generated[generated.len() - window_length..].iter().collect();

		let Some(distribution) = model.get(&context) else {
			debug!("unknown context {:?}, stopping at {} characters", context, generated.len());
			break;
		};

		match sample(distribution, rng) {
			Some(c) => generated.push(c),
			None => break,
		}
	}

	Ok(generated.into_iter().collect())
}
