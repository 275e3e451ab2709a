//! Top-level module for the Zipfian generation system.
//!
//! This module provides:
//! - A ranked phoneme inventory and the Zipfian sampler (`RankedInventory`)
//! - A natural-class table mapping tags to phoneme sets (`NaturalClassTable`)
//! - A parsed syllable structure (`SyllableTemplate`)
//! - Generator configuration and ready-made presets (`GeneratorConfig`)
//! - A high-level generation interface (`Generator`)

/// High-level interface producing syllables, words, sentences and paragraphs.
///
/// Owns its configuration and its random source.
pub mod generator;

/// Ordered phoneme inventory where position encodes frequency rank.
///
/// Also exposes the Zipfian weighted choice used for every slot.
pub mod inventory;

/// Natural classes: tag -> set of member phonemes.
pub mod natural_classes;

/// Syllable structure notation parser (`CV(C)` and friends).
pub mod template;

/// Serializable construction-time configuration.
pub mod config;

/// Ready-made configurations.
pub mod presets;
