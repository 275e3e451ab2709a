use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Built-in natural classes, in declaration order.
///
/// - `C`: consonants
/// - `V`: vowels
/// - `T`: stops
/// - `F`: fricatives
/// - `N`: nasals
/// - `J`: approximants
/// - `O`: obstruents
///
/// The default inventory is the concatenation of these lists in this order,
/// so phonemes belonging to several classes appear several times in it.
const DEFAULT_CLASSES: &[(char, &[&str])] = &[
	('C', &["p", "b", "t", "d", "k", "g", "f", "v", "θ", "ð", "s", "z", "ʃ", "ʒ", "h", "m", "n", "ŋ", "l", "ɹ", "j", "w", "ɲ", "q", "x", "ʈ", "ʁ", "ɣ", "θ"]),
	('V', &["ʌ", "æ", "ɑ", "ɒ", "ɔ", "ə", "ɛ", "ɪ", "i", "ɨ", "ʊ", "u", "y"]),
	('T', &["p", "b", "t", "d", "k", "g", "q", "ʈ"]),
	('F', &["f", "v", "θ", "ð", "s", "z", "ʃ", "ʒ", "h", "x", "ɣ", "θ"]),
	('N', &["m", "n", "ŋ", "ɲ"]),
	('J', &["l", "ɹ", "j", "w", "ʁ"]),
	('O', &["p", "b", "t", "d", "k", "g", "q", "f", "v", "θ", "ð", "s", "z", "ʃ", "ʒ", "h", "x", "ʈ", "ɣ", "θ"]),
];

/// Maps a class tag to the set of phonemes it contains.
///
/// Classes may overlap: a phoneme can be both a stop (`T`) and an
/// obstruent (`O`). Serialized as a JSON object `{ "C": ["p", "t"], ... }`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct NaturalClassTable {
	classes: BTreeMap<char, BTreeSet<String>>,
}

impl NaturalClassTable {
	/// A table with no class at all.
	pub fn empty() -> Self {
		Self { classes: BTreeMap::new() }
	}

	/// Adds phonemes to the class `tag`, creating it if needed.
	pub fn insert<I, S>(&mut self, tag: char, members: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.classes
			.entry(tag)
			.or_default()
			.extend(members.into_iter().map(Into::into));
	}

	/// Members of the class `tag`, or `None` if the class is unknown.
	pub fn members(&self, tag: char) -> Option<&BTreeSet<String>> {
		self.classes.get(&tag)
	}

	/// Whether `phoneme` belongs to the class `tag`.
	pub fn is_member(&self, tag: char, phoneme: &str) -> bool {
		self.classes.get(&tag).is_some_and(|members| members.contains(phoneme))
	}

	/// All class tags, sorted.
	pub fn tags(&self) -> impl Iterator<Item = char> + '_ {
		self.classes.keys().copied()
	}

	/// The inventory matching the built-in table: every class list
	/// concatenated in declaration order, repeats included.
	pub fn default_inventory() -> Vec<String> {
		DEFAULT_CLASSES
			.iter()
			.flat_map(|(_, members)| members.iter().map(|p| (*p).to_owned()))
			.collect()
	}
}

impl Default for NaturalClassTable {
	/// The built-in table (consonants, vowels, stops, fricatives, nasals,
	/// approximants, obstruents).
	fn default() -> Self {
		let mut table = Self::empty();
		for (tag, members) in DEFAULT_CLASSES {
			table.insert(*tag, members.iter().copied());
		}
		table
	}
}
