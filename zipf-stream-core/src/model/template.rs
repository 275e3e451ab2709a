use std::fmt;

use serde::{Deserialize, Serialize};

/// Opens an optional region in the syllable notation.
pub const OPEN_MARKER: char = '(';
/// Closes an optional region in the syllable notation.
pub const CLOSE_MARKER: char = ')';

/// One position of a syllable: a natural class and whether it must appear.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TemplateSlot {
	/// Natural class tag the phoneme is drawn from.
	pub class: char,
	/// `false` for slots declared inside an optional region.
	pub required: bool,
}

/// Marker anomalies found while parsing a syllable notation.
///
/// They never change the parsed slots; they only report notation that was
/// probably not meant the way it reads. Positions are character offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateWarning {
	/// A close marker with no open optional region. Ignored.
	UnmatchedClose { position: usize },
	/// An open marker inside an already open optional region. Regions do
	/// not nest: the next close marker ends the whole region.
	NestedOpen { position: usize },
	/// An optional region still open at the end of the notation. Every slot
	/// after it is optional.
	UnclosedOpen { position: usize },
}

impl fmt::Display for TemplateWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::UnmatchedClose { position } => {
				write!(f, "unmatched '{}' at position {} ignored", CLOSE_MARKER, position)
			}
			Self::NestedOpen { position } => {
				write!(f, "nested '{}' at position {}: optional regions do not nest", OPEN_MARKER, position)
			}
			Self::UnclosedOpen { position } => {
				write!(f, "'{}' at position {} is never closed", OPEN_MARKER, position)
			}
		}
	}
}

/// Scanner state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
	Required,
	/// Inside an optional region opened at the given position.
	Optional { opened_at: usize },
}

/// A parsed syllable structure such as `CV(C)`.
///
/// Every character other than the markers becomes one slot tagged with that
/// character. Characters between `(` and `)` produce optional slots.
///
/// # Invariants
/// - Slots keep the declaration order of the notation
/// - The template is immutable once parsed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyllableTemplate {
	slots: Vec<TemplateSlot>,
	warnings: Vec<TemplateWarning>,
}

impl SyllableTemplate {
	/// Parses a syllable notation.
	///
	/// Parsing never fails. Unbalanced or nested markers are reported through
	/// `warnings()` and logged; the resulting slots are those of a plain
	/// left-to-right scan where `(` switches to optional and `)` back to
	/// required.
	///
	/// # Examples
	/// - `"CV(C)"` → `C` required, `V` required, `C` optional
	/// - `"C(J)V(J)(N)(O)"` → 6 slots, only `C` and `V` required
	pub fn parse(notation: &str) -> Self {
		let mut slots = Vec::new();
		let mut warnings = Vec::new();
		let mut state = ScanState::Required;

		for (position, c) in notation.chars().enumerate() {
			state = match (state, c) {
				(ScanState::Required, OPEN_MARKER) => ScanState::Optional { opened_at: position },
				(ScanState::Optional { .. }, OPEN_MARKER) => {
					warnings.push(TemplateWarning::NestedOpen { position });
					state
				}
				(ScanState::Optional { .. }, CLOSE_MARKER) => ScanState::Required,
				(ScanState::Required, CLOSE_MARKER) => {
					warnings.push(TemplateWarning::UnmatchedClose { position });
					state
				}
				(_, class) => {
					slots.push(TemplateSlot { class, required: state == ScanState::Required });
					state
				}
			};
		}

		if let ScanState::Optional { opened_at } = state {
			warnings.push(TemplateWarning::UnclosedOpen { position: opened_at });
		}

		for warning in &warnings {
			log::warn!("syllable structure \"{}\": {}", notation, warning);
		}

		Self { slots, warnings }
	}

	/// Slots in declaration order.
	pub fn slots(&self) -> &[TemplateSlot] {
		&self.slots
	}

	/// Marker anomalies found while parsing.
	pub fn warnings(&self) -> &[TemplateWarning] {
		&self.warnings
	}

	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}

	/// Number of slots that are always realized.
	pub fn required_count(&self) -> usize {
		self.slots.iter().filter(|slot| slot.required).count()
	}

	/// Distinct class tags used by the template, in first-use order.
	pub fn class_tags(&self) -> Vec<char> {
		let mut tags = Vec::new();
		for slot in &self.slots {
			if !tags.contains(&slot.class) {
				tags.push(slot.class);
			}
		}
		tags
	}
}

impl fmt::Display for SyllableTemplate {
	/// Canonical notation: each optional slot in its own pair of markers.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for slot in &self.slots {
			if slot.required {
				write!(f, "{}", slot.class)?;
			} else {
				write!(f, "{}{}{}", OPEN_MARKER, slot.class, CLOSE_MARKER)?;
			}
		}
		Ok(())
	}
}
