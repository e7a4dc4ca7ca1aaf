use std::fmt;

/// Represents one character observed after a given context.
///
/// The probability fields are only meaningful once the owning
/// `Distribution` has been normalized; they are zero before that.
///
/// ## Invariants
/// - `count` is strictly positive once the record exists
/// - `cumulative_probability >= probability`
#[derive(Clone, Debug, PartialEq)]
pub struct CharData {
	/// The observed character.
	character: char,
	/// Number of times `character` followed the context.
	count: usize,
	/// `count / total` of the owning distribution.
	probability: f64,
	/// Running sum of probabilities up to and including this record.
	cumulative_probability: f64,
}

impl CharData {
	/// Creates a record for a first observation of `character`.
	pub(crate) fn new(character: char) -> Self {
		Self::with_count(character, 1)
	}

	/// Creates a record carrying `count` prior observations.
	pub(crate) fn with_count(character: char, count: usize) -> Self {
		Self {
			character,
			count,
			probability: 0.0,
			cumulative_probability: 0.0,
		}
	}

	pub fn character(&self) -> char {
		self.character
	}

	pub fn count(&self) -> usize {
		self.count
	}

	pub fn probability(&self) -> f64 {
		self.probability
	}

	pub fn cumulative_probability(&self) -> f64 {
		self.cumulative_probability
	}

	/// Records `occurrences` more observations of this character.
	pub(crate) fn add(&mut self, occurrences: usize) {
		self.count += occurrences;
	}

	pub(crate) fn set_probabilities(&mut self, probability: f64, cumulative_probability: f64) {
		self.probability = probability;
		self.cumulative_probability = cumulative_probability;
	}
}

impl fmt::Display for CharData {
	/// Formats as `(c count p cp)`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"({} {} {} {})",
			self.character, self.count, self.probability, self.cumulative_probability
		)
	}
}
