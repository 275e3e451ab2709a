use std::path::Path;

use serde::{Deserialize, Serialize};

use super::natural_classes::NaturalClassTable;
use crate::error::{ParameterError, Result};
use crate::io::read_file;

/// Construction-time parameters of a `Generator`.
///
/// `GeneratorConfig` holds both the **phonology** (inventory, natural classes,
/// syllable structure) and the **shape parameters** (word length,
/// optional-component probability).
///
/// # Responsibilities
/// - Provide sensible defaults for every field
/// - Validate numeric parameters (`set_*` methods and `validate`)
/// - Load from and save to JSON; missing fields fall back to defaults
///
/// # Invariants
/// - Values set through setters are always in range
/// - Deserialized values are checked by `validate`, which `Generator` calls
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
	/// Phoneme symbols, most frequent first when `ordered` is true.
	pub inventory: Vec<String>,

	/// Keep `inventory` order as rank order. When false the generator
	/// shuffles its own copy once at construction.
	pub ordered: bool,

	/// Syllable notation, e.g. `"CV(C)"`.
	pub syllable_structure: String,

	/// Natural classes referenced by `syllable_structure`.
	pub natural_classes: NaturalClassTable,

	/// Mean number of syllables per word (>= 1.0).
	pub(super) average_syllables_per_word: f64,

	/// Probability that an optional slot is realized (0.0..=1.0).
	pub(super) optional_component_probability: f64,
}

impl Default for GeneratorConfig {
	/// Default phonology: the built-in class table, its concatenated
	/// inventory (shuffled), `CV(C)` syllables, 2 syllables per word on
	/// average and a 50% chance per optional slot.
	fn default() -> Self {
		Self {
			inventory: NaturalClassTable::default_inventory(),
			ordered: false,
			syllable_structure: "CV(C)".to_owned(),
			natural_classes: NaturalClassTable::default(),
			average_syllables_per_word: 2.0,
			optional_component_probability: 0.5,
		}
	}
}

impl GeneratorConfig {
	/// Parses a configuration from JSON.
	///
	/// Fields absent from the document keep their default values.
	///
	/// # Errors
	/// - `Error::Json` if the document is malformed
	/// - `Error::Parameter` if a numeric parameter is out of range
	pub fn from_json(json: &str) -> Result<Self> {
		let config: Self = serde_json::from_str(json)?;
		config.validate()?;
		Ok(config)
	}

	/// Loads a JSON configuration file.
	///
	/// # Errors
	/// Same as `from_json`, plus `Error::Io` if the file cannot be read.
	pub fn from_file<P: AsRef<Path>>(filepath: P) -> Result<Self> {
		let contents = read_file(filepath)?;
		Self::from_json(&contents)
	}

	/// Serializes the configuration to pretty-printed JSON.
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}

	/// Returns the mean number of syllables per word.
	pub fn average_syllables_per_word(&self) -> f64 {
		self.average_syllables_per_word
	}

	/// Returns the probability that an optional slot is realized.
	pub fn optional_component_probability(&self) -> f64 {
		self.optional_component_probability
	}

	/// Sets the mean number of syllables per word.
	///
	/// Word lengths are drawn as `1 + Poisson(average - 1)`, so `1.0` gives
	/// single-syllable words only.
	///
	/// # Errors
	/// Returns an error if the value is below 1.0, infinite or NaN.
	pub fn set_average_syllables_per_word(&mut self, average: f64) -> std::result::Result<(), ParameterError> {
		check_average_syllables_per_word(average)?;
		self.average_syllables_per_word = average;
		Ok(())
	}

	/// Sets the probability that an optional slot is realized (0.0..=1.0).
	///
	/// # Errors
	/// Returns an error if the value is outside the valid range.
	pub fn set_optional_component_probability(&mut self, probability: f64) -> std::result::Result<(), ParameterError> {
		check_optional_component_probability(probability)?;
		self.optional_component_probability = probability;
		Ok(())
	}

	/// Checks the numeric parameters.
	///
	/// Useful after deserialization, which bypasses the setters.
	pub fn validate(&self) -> std::result::Result<(), ParameterError> {
		check_average_syllables_per_word(self.average_syllables_per_word)?;
		check_optional_component_probability(self.optional_component_probability)
	}
}

fn check_average_syllables_per_word(average: f64) -> std::result::Result<(), ParameterError> {
	if !average.is_finite() || average < 1.0 {
		return Err(ParameterError::AverageSyllablesPerWord(average));
	}
	Ok(())
}

fn check_optional_component_probability(probability: f64) -> std::result::Result<(), ParameterError> {
	if !(0.0..=1.0).contains(&probability) {
		return Err(ParameterError::OptionalComponentProbability(probability));
	}
	Ok(())
}
