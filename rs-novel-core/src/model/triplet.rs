use serde::{Deserialize, Serialize};

/// Sentinel marking the beginning of a sentence.
///
/// Never produced by a real tokenizer; reserved for the model.
pub const BEGIN: &str = "__BEGIN_SENTENCE__";

/// Sentinel marking the end of a sentence.
pub const END: &str = "__END_SENTENCE__";

/// An ordered (prefix1, prefix2, suffix) token tuple.
///
/// Represents "suffix follows the two-token context (prefix1, prefix2)"
/// as observed in the corpus, or a sentinel transition at a sentence
/// boundary. This is the aggregation key of the frequency model.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Triplet {
	pub prefix1: String,
	pub prefix2: String,
	pub suffix: String,
}

impl Triplet {
	pub fn new(prefix1: &str, prefix2: &str, suffix: &str) -> Self {
		Self {
			prefix1: prefix1.to_owned(),
			prefix2: prefix2.to_owned(),
			suffix: suffix.to_owned(),
		}
	}
}

/// The flattened, persisted form of a (triplet, count) pair.
///
/// One row per pair; the relation declares no uniqueness constraint, so
/// identical rows from repeated saves are valid independent inserts.
///
/// # Invariants
/// - `freq` is always >= 1 for rows produced by the builder
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TripletRow {
	pub prefix1: String,
	pub prefix2: String,
	pub suffix: String,
	pub freq: u32,
}

impl TripletRow {
	pub fn new(triplet: &Triplet, freq: u32) -> Self {
		Self {
			prefix1: triplet.prefix1.clone(),
			prefix2: triplet.prefix2.clone(),
			suffix: triplet.suffix.clone(),
			freq,
		}
	}
}
