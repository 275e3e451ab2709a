//! Zipfian pseudo-word generation library.
//!
//! This crate generates text that mimics the phonological shape of a
//! natural language:
//! - Phonemes are drawn from a ranked inventory with Zipfian (1/rank) weights
//! - Sampling is restricted to the natural class required by each syllable slot
//! - Syllables follow a compact template notation with optional components
//! - Syllables compose into words, words into sentences, sentences into paragraphs
//!
//! Only the high-level API is exposed publicly. File helpers are kept
//! internal.

/// Phoneme inventory, natural classes, syllable templates and the generator.
pub mod model;

/// Error types returned by configuration and generator construction.
pub mod error;

/// I/O utilities (configuration file loading).
///
/// Not exposed
pub(crate) mod io;

pub use error::{ConfigurationError, Error, ParameterError, Result};
