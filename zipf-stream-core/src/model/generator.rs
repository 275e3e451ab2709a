use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Poisson};

use super::config::GeneratorConfig;
use super::inventory::{RankedInventory, zipfian_position};
use super::template::SyllableTemplate;
use crate::error::{ParameterError, Result};

/// High-level generator turning a phonology into text.
///
/// # Responsibilities
/// - Rank the inventory once (shuffled unless the configuration is ordered)
/// - Parse the syllable structure once
/// - Resolve the candidate phonemes of every class used by the template
/// - Generate syllables, words, sentences and paragraphs
///
/// Every check happens in the constructor: once a `Generator` exists,
/// generation cannot fail. Each draw is independent of the previous ones
/// given the random source.
/// A template slot with the phonemes it can receive.
#[derive(Clone, Debug)]
struct SlotCandidates {
	required: bool,
	/// Inventory phonemes of the slot's class, in rank order. Never empty.
	phonemes: Vec<String>,
}

#[derive(Debug)]
pub struct Generator<R: Rng = StdRng> {
	config: GeneratorConfig,
	inventory: RankedInventory,
	template: SyllableTemplate,
	/// One entry per template slot, in template order.
	slots: Vec<SlotCandidates>,
	/// `None` when every word has exactly one syllable.
	extra_syllables: Option<Poisson<f64>>,
	rng: R,
}

impl Generator<StdRng> {
	/// Creates a generator seeded from the operating system.
	///
	/// # Errors
	/// See `with_rng`.
	pub fn new(config: GeneratorConfig) -> Result<Self> {
		Self::with_rng(config, StdRng::from_os_rng())
	}

	/// Creates a generator whose whole output (including the inventory
	/// shuffle) is reproducible from `seed`.
	///
	/// # Errors
	/// See `with_rng`.
	pub fn with_seed(config: GeneratorConfig, seed: u64) -> Result<Self> {
		Self::with_rng(config, StdRng::seed_from_u64(seed))
	}
}

impl<R: Rng> Generator<R> {
	/// Creates a generator drawing from `rng`.
	///
	/// # Behavior
	/// - Validates the numeric parameters of `config`.
	/// - Copies the inventory and shuffles the copy if `config.ordered` is false.
	/// - Parses `config.syllable_structure`; marker anomalies are logged.
	/// - Filters the inventory for every class the template uses.
	///
	/// # Errors
	/// - `Error::Parameter` if a numeric parameter is out of range
	/// - `Error::Configuration` if the template uses an unknown class, or a
	///   class with no member in the inventory
	pub fn with_rng(config: GeneratorConfig, mut rng: R) -> Result<Self> {
		config.validate()?;

		let mut inventory = RankedInventory::new(config.inventory.iter().cloned());
		if !config.ordered {
			inventory = inventory.shuffled(&mut rng);
		}

		let template = SyllableTemplate::parse(&config.syllable_structure);

		let mut slots = Vec::with_capacity(template.len());
		for slot in template.slots() {
			let phonemes: Vec<String> = inventory
				.filter_by_class(&config.natural_classes, slot.class)?
				.into_iter()
				.map(str::to_owned)
				.collect();
			slots.push(SlotCandidates { required: slot.required, phonemes });
		}

		let average = config.average_syllables_per_word();
		let lambda = average - 1.0;
		let extra_syllables = if lambda > 0.0 {
			let distribution = Poisson::new(lambda).map_err(|_| ParameterError::AverageSyllablesPerWord(average))?;
			Some(distribution)
		} else {
			None
		};

		log::debug!(
			"generator ready: template \"{}\", {} phonemes ranked as {:?}",
			template,
			inventory.len(),
			inventory.phonemes()
		);

		Ok(Self { config, inventory, template, slots, extra_syllables, rng })
	}

	/// The configuration this generator was built from (inventory in its
	/// original order).
	pub fn config(&self) -> &GeneratorConfig {
		&self.config
	}

	/// The effective ranking used for sampling.
	pub fn inventory(&self) -> &RankedInventory {
		&self.inventory
	}

	pub fn template(&self) -> &SyllableTemplate {
		&self.template
	}

	/// Generates one syllable.
	///
	/// For each slot in template order:
	/// - an optional slot is skipped when a uniform draw in [0, 1) is greater
	///   than the optional component probability
	/// - a realized slot receives one phoneme of its class, chosen Zipfianly
	///   among the class members present in the inventory
	pub fn make_syllable(&mut self) -> String {
		let probability = self.config.optional_component_probability();
		let mut syllable = String::new();

		for slot in &self.slots {
			if !slot.required && self.rng.random::<f64>() > probability {
				continue;
			}
			let position = zipfian_position(slot.phonemes.len(), &mut self.rng);
			syllable.push_str(&slot.phonemes[position]);
		}

		syllable
	}

	/// Draws a syllable count: `1 + Poisson(average - 1)`.
	pub fn draw_syllable_count(&mut self) -> usize {
		let extra = match &self.extra_syllables {
			Some(distribution) => distribution.sample(&mut self.rng) as usize,
			None => 0,
		};
		1 + extra
	}

	/// Generates the syllables of one word, in order.
	pub fn make_word_syllables(&mut self) -> Vec<String> {
		let count = self.draw_syllable_count();
		log::trace!("word of {} syllable(s)", count);
		(0..count).map(|_| self.make_syllable()).collect()
	}

	/// Generates one word: its syllables concatenated without separator.
	pub fn make_word(&mut self) -> String {
		self.make_word_syllables().concat()
	}

	/// Generates `length` words separated by single spaces.
	///
	/// A length of 0 gives an empty string.
	pub fn make_sentence(&mut self, length: usize) -> String {
		(0..length).map(|_| self.make_word()).collect::<Vec<_>>().join(" ")
	}

	/// Generates `num_sentences` sentences of `sentence_length` words,
	/// separated by newlines.
	pub fn make_paragraph(&mut self, num_sentences: usize, sentence_length: usize) -> String {
		(0..num_sentences)
			.map(|_| self.make_sentence(sentence_length))
			.collect::<Vec<_>>()
			.join("\n")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::BTreeMap;

	use crate::error::{ConfigurationError, Error};
	use crate::model::natural_classes::NaturalClassTable;
	use crate::model::presets;

	/// Ordered configuration with explicit phonology.
	fn config(inventory: &[&str], classes: &[(char, &[&str])], structure: &str) -> GeneratorConfig {
		let mut natural_classes = NaturalClassTable::empty();
		for (tag, members) in classes {
			natural_classes.insert(*tag, members.iter().copied());
		}
		GeneratorConfig {
			inventory: inventory.iter().map(|p| (*p).to_owned()).collect(),
			ordered: true,
			syllable_structure: structure.to_owned(),
			natural_classes,
			..GeneratorConfig::default()
		}
	}

	/// `pa` with an optional `p` coda.
	fn pa_config(probability: f64) -> GeneratorConfig {
		let mut config = config(&["p", "a"], &[('C', &["p"]), ('V', &["a"])], "CV(C)");
		config.set_optional_component_probability(probability).unwrap();
		config
	}

	#[test]
	fn single_syllable_stops_follow_zipf() {
		let mut config = config(&["p", "t", "k"], &[('C', &["p", "t", "k"])], "C");
		config.set_average_syllables_per_word(1.0).unwrap();
		let mut generator = Generator::with_seed(config, 1234).unwrap();

		let mut counts: BTreeMap<String, usize> = BTreeMap::new();
		for _ in 0..60_000 {
			let word = generator.make_word();
			assert!(["p", "t", "k"].contains(&word.as_str()), "unexpected word {}", word);
			*counts.entry(word).or_insert(0) += 1;
		}

		// Weights 1 : 1/2 : 1/3, so "p" is drawn three times as often as "k".
		let ratio = counts["p"] as f64 / counts["k"] as f64;
		assert!((2.7..3.3).contains(&ratio), "p/k ratio was {:.2}", ratio);
		assert!(counts["p"] > counts["t"] && counts["t"] > counts["k"]);
	}

	#[test]
	fn every_slot_has_ranked_candidates() {
		let config = config(
			&["k", "a", "p", "i", "t"],
			&[('C', &["p", "t", "k"]), ('V', &["a", "i"])],
			"C(V)C",
		);
		let generator = Generator::with_seed(config, 0).unwrap();

		let shape: Vec<(bool, Vec<&str>)> = generator
			.slots
			.iter()
			.map(|slot| (slot.required, slot.phonemes.iter().map(String::as_str).collect()))
			.collect();
		assert_eq!(
			shape,
			vec![
				(true, vec!["k", "p", "t"]),
				(false, vec!["a", "i"]),
				(true, vec!["k", "p", "t"]),
			]
		);
	}

	#[test]
	fn realized_slots_always_receive_a_phoneme() {
		let mut config = config(&["p", "a"], &[('C', &["p"]), ('V', &["a"])], "C(V)(C)V");
		config.set_optional_component_probability(1.0).unwrap();
		let mut generator = Generator::with_seed(config, 6).unwrap();
		for _ in 0..500 {
			assert_eq!(generator.make_syllable().chars().count(), 4);
		}
	}

	#[test]
	fn zero_probability_realizes_required_slots_only() {
		let mut generator = Generator::with_seed(pa_config(0.0), 5).unwrap();
		for _ in 0..1_000 {
			assert_eq!(generator.make_syllable(), "pa");
		}
	}

	#[test]
	fn full_probability_realizes_every_slot() {
		let mut generator = Generator::with_seed(pa_config(1.0), 5).unwrap();
		for _ in 0..1_000 {
			assert_eq!(generator.make_syllable(), "pap");
		}
	}

	#[test]
	fn optional_slots_follow_their_probability() {
		let mut generator = Generator::with_seed(pa_config(0.3), 8).unwrap();
		let trials = 20_000;
		let realized = (0..trials).filter(|_| generator.make_syllable() == "pap").count();
		let rate = realized as f64 / trials as f64;
		assert!((rate - 0.3).abs() < 0.02, "optional rate was {:.3}", rate);
	}

	#[test]
	fn syllable_length_stays_within_template_bounds() {
		let mut generator = Generator::with_seed(presets::sonorous(), 77).unwrap();
		let min = generator.template().required_count();
		let max = generator.template().len();
		// Every phoneme of this preset is a single character.
		for _ in 0..2_000 {
			let length = generator.make_syllable().chars().count();
			assert!((min..=max).contains(&length), "syllable of {} phonemes", length);
		}
	}

	#[test]
	fn words_have_at_least_one_syllable() {
		let mut generator = Generator::with_seed(presets::guttural(), 3).unwrap();
		let trials = 20_000;
		let mut total = 0;
		for _ in 0..trials {
			let syllables = generator.make_word_syllables();
			assert!(!syllables.is_empty());
			total += syllables.len();
		}
		let mean = total as f64 / trials as f64;
		assert!((mean - 2.0).abs() < 0.05, "mean syllable count was {:.3}", mean);
	}

	#[test]
	fn average_of_one_means_one_syllable() {
		let mut config = GeneratorConfig::default();
		config.set_average_syllables_per_word(1.0).unwrap();
		let mut generator = Generator::with_seed(config, 11).unwrap();
		for _ in 0..1_000 {
			assert_eq!(generator.draw_syllable_count(), 1);
		}
	}

	#[test]
	fn sentences_are_space_separated() {
		let mut generator = Generator::with_seed(presets::guttural(), 21).unwrap();
		assert_eq!(generator.make_sentence(0), "");

		for length in 1..10 {
			let sentence = generator.make_sentence(length);
			assert_eq!(sentence.matches(' ').count(), length - 1);
			assert!(sentence.split(' ').all(|word| !word.is_empty()));
		}
	}

	#[test]
	fn paragraphs_are_newline_separated() {
		let mut generator = Generator::with_seed(presets::sonorous(), 22).unwrap();
		let paragraph = generator.make_paragraph(4, 6);
		let lines: Vec<&str> = paragraph.split('\n').collect();
		assert_eq!(lines.len(), 4);
		for line in lines {
			assert_eq!(line.split(' ').count(), 6);
		}
		assert_eq!(generator.make_paragraph(0, 6), "");
	}

	#[test]
	fn same_seed_same_text() {
		let mut a = Generator::with_seed(GeneratorConfig::default(), 42).unwrap();
		let mut b = Generator::with_seed(GeneratorConfig::default(), 42).unwrap();
		assert_eq!(a.inventory(), b.inventory());
		assert_eq!(a.make_paragraph(3, 5), b.make_paragraph(3, 5));
	}

	#[test]
	fn unordered_inventory_is_shuffled_on_a_copy() {
		let generator = Generator::with_seed(GeneratorConfig::default(), 42).unwrap();
		let original = NaturalClassTable::default_inventory();

		assert_eq!(generator.config().inventory, original);
		assert_ne!(generator.inventory().phonemes(), original.as_slice());

		let mut ranked = generator.inventory().phonemes().to_vec();
		let mut expected = original.clone();
		ranked.sort();
		expected.sort();
		assert_eq!(ranked, expected);
	}

	#[test]
	fn ordered_inventory_keeps_its_order() {
		let generator = Generator::with_seed(presets::guttural(), 42).unwrap();
		assert_eq!(generator.inventory().phonemes(), generator.config().inventory.as_slice());
		assert_eq!(generator.inventory().rank("x"), Some(1));
	}

	#[test]
	fn unknown_class_is_a_configuration_error() {
		let config = config(&["p", "a"], &[('C', &["p"])], "CV");
		let err = Generator::with_seed(config, 0).unwrap_err();
		assert!(matches!(err, Error::Configuration(ConfigurationError::UnknownClass('V'))));
	}

	#[test]
	fn class_absent_from_inventory_is_a_configuration_error() {
		let config = config(&["p", "t"], &[('C', &["p", "t"]), ('V', &["a"])], "CV");
		let err = Generator::with_seed(config, 0).unwrap_err();
		assert!(matches!(err, Error::Configuration(ConfigurationError::EmptyClass('V'))));
	}

	#[test]
	fn unused_empty_class_is_fine() {
		let config = config(&["p"], &[('C', &["p"]), ('V', &["a"])], "C");
		assert!(Generator::with_seed(config, 0).is_ok());
	}

	#[test]
	fn out_of_range_parameters_are_rejected() {
		let mut config = GeneratorConfig::default();
		config.average_syllables_per_word = 0.5;
		let err = Generator::with_seed(config, 0).unwrap_err();
		assert!(matches!(err, Error::Parameter(ParameterError::AverageSyllablesPerWord(_))));

		let mut config = GeneratorConfig::default();
		config.optional_component_probability = -1.0;
		let err = Generator::with_seed(config, 0).unwrap_err();
		assert!(matches!(err, Error::Parameter(ParameterError::OptionalComponentProbability(_))));
	}

	#[test]
	fn borrows_a_caller_rng() {
		let mut rng = StdRng::seed_from_u64(9);
		let mut generator = Generator::with_rng(presets::guttural(), &mut rng).unwrap();
		assert!(!generator.make_word().is_empty());
	}
}
