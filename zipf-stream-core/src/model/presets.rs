//! Ready-made generator configurations.
//!
//! Each function returns a fresh `GeneratorConfig`; nothing is shared
//! between callers.

use super::config::GeneratorConfig;

/// Builds a preset from literal values.
fn preset(inventory: &[&str], ordered: bool, syllable_structure: &str, average: f64, probability: f64) -> GeneratorConfig {
	GeneratorConfig {
		inventory: inventory.iter().map(|p| (*p).to_owned()).collect(),
		ordered,
		syllable_structure: syllable_structure.to_owned(),
		average_syllables_per_word: average,
		optional_component_probability: probability,
		..GeneratorConfig::default()
	}
}

/// Soft, mostly monosyllabic words with optional liquids and codas.
///
/// Shuffled inventory, `C(J)V(J)(N)(O)`, 1.2 syllables per word, optional
/// components realized 20% of the time.
pub fn sonorous() -> GeneratorConfig {
	preset(
		&["p", "m", "v", "t", "n", "s", "ɹ", "l", "ʃ", "ʒ", "ʈ", "k", "ɲ", "x", "ŋ", "q", "i", "y", "ɛ", "æ", "ə", "u", "ɔ", "ɑ"],
		false,
		"C(J)V(J)(N)(O)",
		1.2,
		0.2,
	)
}

/// Back-of-the-mouth consonants ranked first, `C(J)V(C)` syllables.
///
/// Ordered inventory (`x` is the most frequent consonant), 2 syllables per
/// word, optional components realized 10% of the time.
pub fn guttural() -> GeneratorConfig {
	preset(
		&["x", "ɣ", "q", "ʁ", "p", "n", "ŋ", "t", "k", "l", "θ", "g", "i", "y", "u", "ɑ", "ə"],
		true,
		"C(J)V(C)",
		2.0,
		0.1,
	)
}
