use thiserror::Error;

/// Problems with the phoneme inventory, the class table, or the template.
///
/// These are detected once, when a `Generator` is built, so that generation
/// itself never has to skip a slot for lack of candidates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
	#[error("syllable template references unknown natural class '{0}'")]
	UnknownClass(char),

	#[error("natural class '{0}' has no member in the inventory")]
	EmptyClass(char),
}

/// Numeric generator parameters outside their valid range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
	#[error("average syllables per word must be a finite number >= 1.0, got {0}")]
	AverageSyllablesPerWord(f64),

	#[error("optional component probability must be between 0.0 and 1.0, got {0}")]
	OptionalComponentProbability(f64),
}

/// Any error produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
	#[error(transparent)]
	Configuration(#[from] ConfigurationError),

	#[error(transparent)]
	Parameter(#[from] ParameterError),

	#[error("invalid generator configuration: {0}")]
	Json(#[from] serde_json::Error),

	#[error("cannot read generator configuration: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
