use std::fmt;

use log::trace;

use super::char_data::CharData;
use crate::error::{ModelError, Result};

/// Represents the continuations observed after one context window.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations. Records are kept in
/// first-seen order, which fixes the order of the cumulative scan.
///
/// ## Responsibilities:
/// - Accumulate observations during training
/// - Turn counts into probabilities and cumulative probabilities
/// - Pick a character from a uniform draw
/// - Merge with the distribution of the same context in another model
///
/// ## Invariants
/// - Each character appears in at most one record
/// - Record order is insertion order and never changes
/// - After `normalize`, cumulative probabilities are non-decreasing and
///   the last one is 1.0 up to rounding
#[derive(Clone, Debug, PartialEq)]
pub struct Distribution {
	records: Vec<CharData>,
}

impl Distribution {
	/// Creates a new empty distribution.
	pub(crate) fn new() -> Self {
		Self { records: Vec::new() }
	}

	/// Records an occurrence of `character` after this context.
	///
	/// - If the character was already seen, its count is increased.
	/// - Otherwise, a new record is appended with a count of 1.
	pub(crate) fn record(&mut self, character: char) {
		match self.records.iter_mut().find(|data| data.character() == character) {
			Some(data) => data.add(1),
			None => self.records.push(CharData::new(character)),
		}
	}

	/// Returns the records in insertion order.
	pub fn records(&self) -> &[CharData] {
		&self.records
	}

	/// Returns the record for `character`, if it was observed.
	pub fn get(&self, character: char) -> Option<&CharData> {
		self.records.iter().find(|data| data.character() == character)
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Sum of all record counts.
	pub fn total_count(&self) -> usize {
		self.records.iter().map(CharData::count).sum()
	}

	/// Computes the probability and cumulative probability of every record.
	///
	/// Records are visited in insertion order; each cumulative value is the
	/// previous one plus the record's own probability.
	///
	/// # Errors
	/// Returns `ZeroTotalCount` if the distribution holds no observation.
	/// The returned error carries an empty context name; callers that know
	/// the context replace it.
	pub(crate) fn normalize(&mut self) -> Result<()> {
		let total = self.total_count();
		if total == 0 {
			return Err(ModelError::ZeroTotalCount(String::new()));
		}

		let total = total as f64;
		let mut running = 0.0;
		for data in &mut self.records {
			let probability = data.count() as f64 / total;
			running += probability;
			data.set_probabilities(probability, running);
		}
		Ok(())
	}

	/// Returns the first character whose cumulative probability is strictly
	/// greater than `r`.
	///
	/// `r` is expected in `[0, 1)`. If rounding leaves the last cumulative
	/// value at or below `r`, the last record is returned instead.
	/// Returns `None` only for an empty distribution.
	pub fn choose(&self, r: f64) -> Option<char> {
		if let Some(data) = self.records.iter().find(|data| r < data.cumulative_probability()) {
			return Some(data.character());
		}

		let last = self.records.last()?;
		trace!(
			"draw {} above last cumulative probability {}, falling back to {:?}",
			r,
			last.cumulative_probability(),
			last.character()
		);
		Some(last.character())
	}

	/// Merges another distribution into this one.
	///
	/// Counts of shared characters are summed; characters only present in
	/// `other` are appended in `other`'s order. Probabilities are left stale
	/// until the next `normalize`.
	pub(crate) fn merge(&mut self, other: &Self) {
		for incoming in &other.records {
			match self.records.iter_mut().find(|data| data.character() == incoming.character()) {
				Some(data) => data.add(incoming.count()),
				None => self.records.push(CharData::with_count(incoming.character(), incoming.count())),
			}
		}
	}
}

impl fmt::Display for Distribution {
	/// Formats as `[(a 3 0.75 0.75), (b 1 0.25 1)]`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[")?;
		for (i, data) in self.records.iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{}", data)?;
		}
		write!(f, "]")
	}
}
