use std::fmt;
use std::io;

use indexmap::IndexMap;
use log::{debug, info};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::config::ModelConfig;
use super::distribution::Distribution;
use super::generator;
use crate::error::{ModelError, Result};
use crate::io::CharSource;

/// Represents a fixed-order character language model.
///
/// The `LanguageModel` maps every context window of `window_length`
/// characters seen in the corpus to the distribution of characters that
/// followed it, and generates text by sampling from those distributions.
///
/// # Responsibilities
/// - Build the context map from character streams
/// - Keep every distribution normalized after each training call
/// - Merge with another model of the same window length
/// - Generate text from a seed text, with a per-call random stream
///
/// # Invariants
/// - `window_length` is always >= 1
/// - Each key in `contexts` is exactly `window_length` characters long
/// - Every distribution holds at least one observation
/// - Contexts and records iterate in first-seen order
#[derive(Clone, Debug)]
pub struct LanguageModel {
	/// Number of characters in a context window.
	window_length: usize,

	/// Seed for generation; `None` draws from the thread-local generator.
	seed: Option<u64>,

	/// Mapping from a context window to its continuations.
	contexts: IndexMap<String, Distribution>,
}

/// Counts collected by a single pass over a source.
struct Pass {
	contexts: IndexMap<String, Distribution>,
	characters_read: usize,
}

impl LanguageModel {
	/// Creates an empty model whose generations vary from call to call.
	///
	/// # Errors
	/// Returns `InvalidWindowLength` if `window_length` is 0.
	pub fn new(window_length: usize) -> Result<Self> {
		ModelConfig::new(window_length).build()
	}

	/// Creates an empty model whose generations are reproducible:
	/// identical inputs always give identical outputs.
	///
	/// # Errors
	/// Returns `InvalidWindowLength` if `window_length` is 0.
	pub fn with_seed(window_length: usize, seed: u64) -> Result<Self> {
		ModelConfig::new(window_length).with_seed(seed).build()
	}

	/// Builds an empty model from an already validated configuration.
	pub(crate) fn from_config(config: ModelConfig) -> Self {
		Self {
			window_length: config.window_length,
			seed: config.seed,
			contexts: IndexMap::new(),
		}
	}

	pub fn window_length(&self) -> usize {
		self.window_length
	}

	pub fn seed(&self) -> Option<u64> {
		self.seed
	}

	/// Number of known contexts.
	pub fn len(&self) -> usize {
		self.contexts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.contexts.is_empty()
	}

	/// Returns the distribution learned for `context`, if any.
	pub fn get(&self, context: &str) -> Option<&Distribution> {
		self.contexts.get(context)
	}

	/// Iterates over contexts and their distributions in first-seen order.
	pub fn contexts(&self) -> impl Iterator<Item = (&str, &Distribution)> {
		self.contexts.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Trains the model on every character of `source`.
	///
	/// The first `window_length` characters form the initial context; each
	/// following character is counted as a continuation of the current
	/// context, which then slides forward by one character.
	///
	/// # Notes
	/// - Counts accumulate across calls. Use `reset` for a fresh model.
	/// - A source shorter than `window_length` leaves counts unchanged.
	/// - Probabilities of every context are recomputed at the end,
	///   including contexts this call did not touch.
	///
	/// # Errors
	/// Returns `Io` if the source fails. The pass is counted apart and only
	/// applied once the source is exhausted, so a failed call leaves the
	/// model as it was.
	pub fn train<S: CharSource + ?Sized>(&mut self, source: &mut S) -> Result<()> {
		let pass = Self::count_pass(self.window_length, source)?;
		self.absorb(&pass.contexts);
		self.finalize()?;

		info!(
			"trained on {} characters, {} contexts known",
			pass.characters_read,
			self.contexts.len()
		);
		Ok(())
	}

	/// Trains the model `passes` times, opening a fresh source for each pass.
	///
	/// Each pass reinforces the counts of the previous ones, so training the
	/// same corpus twice doubles every count and keeps probabilities.
	///
	/// # Errors
	/// Stops at the first source that fails to open or read. Passes already
	/// completed stay applied.
	pub fn train_passes<S, F>(&mut self, passes: usize, mut open: F) -> Result<()>
	where
		S: CharSource,
		F: FnMut() -> io::Result<S>,
	{
		for pass in 1..=passes {
			let mut source = open()?;
			self.train(&mut source)?;
			debug!("training pass {}/{} done", pass, passes);
		}
		Ok(())
	}

	/// Reads `source` to the end and counts its transitions.
	fn count_pass<S: CharSource + ?Sized>(window_length: usize, source: &mut S) -> Result<Pass> {
		let mut pass = Pass { contexts: IndexMap::new(), characters_read: 0 };
		let mut window = String::new();

		while pass.characters_read < window_length {
			match source.next_char()? {
				Some(c) => {
					window.push(c);
					pass.characters_read += 1;
				}
				// Too short to form a window, nothing to count
				None => return Ok(pass),
			}
		}

		while let Some(c) = source.next_char()? {
			pass.characters_read += 1;
			match pass.contexts.get_mut(&window) {
				Some(distribution) => distribution.record(c),
				None => {
					let mut distribution = Distribution::new();
					distribution.record(c);
					pass.contexts.insert(window.clone(), distribution);
				}
			}

			window.remove(0);
			window.push(c);
		}

		Ok(pass)
	}

	/// Adds counted contexts, appending unknown ones in their own order.
	fn absorb(&mut self, contexts: &IndexMap<String, Distribution>) {
		for (key, distribution) in contexts {
			if let Some(existing) = self.contexts.get_mut(key) {
				existing.merge(distribution);
			} else {
				self.contexts.insert(key.clone(), distribution.clone());
			}
		}
	}

	/// Recomputes the probabilities of every context.
	fn finalize(&mut self) -> Result<()> {
		for (context, distribution) in &mut self.contexts {
			distribution.normalize().map_err(|e| match e {
				ModelError::ZeroTotalCount(_) => ModelError::ZeroTotalCount(context.clone()),
				other => other,
			})?;
		}
		Ok(())
	}

	/// Merges another model into this one.
	///
	/// # Notes
	/// - Both models must have the same window length.
	/// - Counts for matching contexts and characters are summed.
	/// - The seed of `self` is kept.
	///
	/// # Errors
	/// Returns `WindowLengthMismatch` if the window lengths differ.
	pub fn merge(&mut self, other: &Self) -> Result<()> {
		if self.window_length != other.window_length {
			return Err(ModelError::WindowLengthMismatch {
				expected: self.window_length,
				found: other.window_length,
			});
		}

		self.absorb(&other.contexts);
		self.finalize()
	}

	/// Forgets every learned context. Window length and seed are kept.
	pub fn reset(&mut self) {
		self.contexts.clear();
	}

	/// Generates text starting from `initial_text` until it is
	/// `target_length` characters long, or until the trailing window is an
	/// unknown context.
	///
	/// Every call uses its own random stream: seeded from the model seed if
	/// there is one, otherwise from the thread-local generator.
	///
	/// # Errors
	/// Returns `InitialTextTooShort` if text has to be generated and
	/// `initial_text` has fewer than `window_length` characters.
	pub fn generate(&self, initial_text: &str, target_length: usize) -> Result<String> {
		match self.seed {
			Some(seed) => self.generate_with(initial_text, target_length, &mut StdRng::seed_from_u64(seed)),
			None => self.generate_with(initial_text, target_length, &mut rand::rng()),
		}
	}

	/// Same as `generate`, drawing from the given random source.
	pub fn generate_with<R: Rng>(&self, initial_text: &str, target_length: usize, rng: &mut R) -> Result<String> {
		generator::generate(self, initial_text, target_length, rng)
	}
}

impl fmt::Display for LanguageModel {
	/// One `context : [records]` line per context, in first-seen order.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (context, distribution) in &self.contexts {
			writeln!(f, "{} : {}", context, distribution)?;
		}
		Ok(())
	}
}
