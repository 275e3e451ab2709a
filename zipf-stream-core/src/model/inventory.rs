use rand::Rng;
use rand::seq::SliceRandom;

use serde::{Deserialize, Serialize};

use super::natural_classes::NaturalClassTable;
use crate::error::ConfigurationError;

/// An ordered phoneme inventory.
///
/// The position of a phoneme is its frequency rank: the first phoneme
/// (rank 1) is the most frequent one. The inventory itself holds no weights;
/// weights are derived from positions at sampling time, relative to the
/// candidate subset being sampled.
///
/// ## Invariants
/// - Order is fixed once the inventory is built (or shuffled)
/// - Repeated phonemes are allowed; each occurrence is its own rank
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct RankedInventory {
	/// Phoneme symbols, most frequent first.
	phonemes: Vec<String>,
}

impl RankedInventory {
	/// Creates an inventory keeping the given order as rank order.
	pub fn new<I, S>(phonemes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self { phonemes: phonemes.into_iter().map(Into::into).collect() }
	}

	/// Returns this inventory with its phonemes shuffled once.
	///
	/// The result is a new, arbitrary but fixed ranking. Only this copy is
	/// affected.
	pub fn shuffled<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
		self.phonemes.shuffle(rng);
		self
	}

	/// All phonemes, in rank order.
	pub fn phonemes(&self) -> &[String] {
		&self.phonemes
	}

	pub fn len(&self) -> usize {
		self.phonemes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.phonemes.is_empty()
	}

	/// 1-based rank of the first occurrence of `phoneme`, if present.
	pub fn rank(&self, phoneme: &str) -> Option<usize> {
		self.phonemes.iter().position(|p| p == phoneme).map(|i| i + 1)
	}

	/// Returns the inventory phonemes belonging to the class `tag`.
	///
	/// The result follows inventory order, not class-table order, so the
	/// relative ranking of the candidates is preserved. Repeated inventory
	/// entries are kept.
	///
	/// # Errors
	/// - `UnknownClass` if `tag` is not in `classes`
	/// - `EmptyClass` if no inventory phoneme belongs to the class
	pub fn filter_by_class<'a>(
		&'a self,
		classes: &NaturalClassTable,
		tag: char,
	) -> Result<Vec<&'a str>, ConfigurationError> {
		let members = classes.members(tag).ok_or(ConfigurationError::UnknownClass(tag))?;
		let relevant: Vec<&str> = self
			.phonemes
			.iter()
			.filter(|phoneme| members.contains(phoneme.as_str()))
			.map(String::as_str)
			.collect();

		if relevant.is_empty() {
			return Err(ConfigurationError::EmptyClass(tag));
		}
		Ok(relevant)
	}
}

/// Harmonic weight of the candidate at 1-based position `rank`.
fn zipfian_weight(rank: usize) -> f64 {
	1.0 / rank as f64
}

/// Draws a 0-based position among `len` ranked candidates with probability
/// proportional to `1 / (position + 1)`.
///
/// The first position has weight 1, the second 1/2, the third 1/3, and so
/// on. A uniform value is drawn in `[0, total)` and the cumulative weights
/// are walked until they reach it.
///
/// Panics if `len` is 0.
pub fn zipfian_position<R>(len: usize, rng: &mut R) -> usize
where
	R: Rng + ?Sized,
{
	assert!(len > 0, "zipfian_position: no candidate to choose from");

	let total: f64 = (1..=len).map(zipfian_weight).sum();
	let target = rng.random_range(0.0..total);

	let mut cumulative = 0.0;
	for i in 0..len {
		cumulative += zipfian_weight(i + 1);
		if cumulative >= target {
			return i;
		}
	}

	// Rounding can leave the last cumulative sum a hair below `target`.
	len - 1
}

/// Picks one candidate with probability proportional to `1 / position`.
///
/// `candidates` must be in ascending rank order. Each call is an independent
/// draw. Returns `None` if `candidates` is empty.
pub fn zipfian_choice<'a, T, R>(candidates: &'a [T], rng: &mut R) -> Option<&'a T>
where
	R: Rng + ?Sized,
{
	if candidates.is_empty() {
		return None;
	}
	candidates.get(zipfian_position(candidates.len(), rng))
}
