use std::collections::HashMap;

use super::splitter;
use super::tokenizer::Tokenize;
use super::triplet::{Triplet, TripletRow, BEGIN, END};

/// Aggregated triplet occurrence counts for one corpus.
///
/// The `FrequencyModel` maps each observed (prefix1, prefix2, suffix)
/// triplet to the number of times it occurred across all sentences of
/// the corpus, including the sentinel transitions at sentence boundaries.
///
/// # Responsibilities
/// - Split the corpus into sentences and tokenize each one
/// - Accumulate interior sliding-window triplet counts per sentence
/// - Pin the per-sentence BEGIN/END boundary rows to count 1
/// - Merge per-sentence counts into the corpus-wide table by summation
///
/// # Invariants
/// - Every stored count is >= 1
/// - Boundary rows contribute exactly 1 per sentence, however often the
///   same pair recurs as an interior window in that sentence; across
///   sentences they sum like any other key
#[derive(Clone, Debug, Default)]
pub struct FrequencyModel {
	triplet_freqs: HashMap<Triplet, u32>,
}

impl FrequencyModel {
	/// Builds the frequency model from raw corpus text.
	///
	/// An empty corpus produces an empty model; this is not an error.
	pub fn build(text: &str, tokenizer: &dyn Tokenize) -> Self {
		let mut triplet_freqs: HashMap<Triplet, u32> = HashMap::new();

		let sentences = splitter::split(text);
		tracing::debug!(sentences = sentences.len(), "building frequency model");

		for sentence in &sentences {
			let tokens = tokenizer.tokenize(sentence);
			for (triplet, n) in Self::sentence_freqs(&tokens) {
				*triplet_freqs.entry(triplet).or_insert(0) += n;
			}
		}

		tracing::debug!(triplets = triplet_freqs.len(), "frequency model built");
		Self { triplet_freqs }
	}

	/// Counts the triplets contributed by a single sentence.
	///
	/// - Fewer than 2 tokens: the sentence contributes nothing
	/// - Exactly 2 tokens: only the two boundary rows
	/// - 3 or more tokens: one interior triplet per sliding window, plus
	///   the boundary rows, which are *set* to 1 last and therefore
	///   overwrite any coinciding interior count for this sentence
	fn sentence_freqs(tokens: &[String]) -> HashMap<Triplet, u32> {
		let mut freqs = HashMap::new();

		if tokens.len() < 2 {
			return freqs;
		}

		for window in tokens.windows(3) {
			let triplet = Triplet::new(&window[0], &window[1], &window[2]);
			*freqs.entry(triplet).or_insert(0) += 1;
		}

		let begin = Triplet::new(BEGIN, &tokens[0], &tokens[1]);
		freqs.insert(begin, 1);

		let end = Triplet::new(&tokens[tokens.len() - 2], &tokens[tokens.len() - 1], END);
		freqs.insert(end, 1);

		freqs
	}

	/// Number of distinct triplet keys in the model.
	pub fn len(&self) -> usize {
		self.triplet_freqs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.triplet_freqs.is_empty()
	}

	/// Count for one exact triplet, if observed.
	pub fn freq(&self, prefix1: &str, prefix2: &str, suffix: &str) -> Option<u32> {
		self.triplet_freqs
			.get(&Triplet::new(prefix1, prefix2, suffix))
			.copied()
	}

	/// Iterates over all (triplet, count) pairs in unspecified order.
	pub fn iter(&self) -> impl Iterator<Item = (&Triplet, u32)> {
		self.triplet_freqs.iter().map(|(triplet, freq)| (triplet, *freq))
	}

	/// Flattens the model into persistable rows.
	pub fn rows(&self) -> Vec<TripletRow> {
		self.triplet_freqs
			.iter()
			.map(|(triplet, freq)| TripletRow::new(triplet, *freq))
			.collect()
	}

	/// Renders the model as `prefix1|prefix2|suffix freq` lines.
	///
	/// Returned to the caller instead of printed, so the caller decides
	/// where the listing goes.
	pub fn inspect(&self) -> Vec<String> {
		self.triplet_freqs
			.iter()
			.map(|(t, freq)| format!("{}|{}|{} {}", t.prefix1, t.prefix2, t.suffix, freq))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::tokenizer::WordTokenizer;

	fn build(text: &str) -> FrequencyModel {
		FrequencyModel::build(text, &WordTokenizer)
	}

	#[test]
	fn empty_corpus_builds_empty_model() {
		assert!(build("").is_empty());
		assert!(build("   \n ").is_empty());
	}

	#[test]
	fn sentence_contributes_interior_and_boundary_triplets() {
		// Tokens: ["I", "am", "a", "cat", "."] -> 3 interior windows + 2 boundary rows
		let model = build("I am a cat.");
		assert_eq!(model.len(), 5);
		assert_eq!(model.freq("I", "am", "a"), Some(1));
		assert_eq!(model.freq("am", "a", "cat"), Some(1));
		assert_eq!(model.freq("a", "cat", "."), Some(1));
		assert_eq!(model.freq(BEGIN, "I", "am"), Some(1));
		assert_eq!(model.freq("cat", ".", END), Some(1));
	}

	#[test]
	fn begin_rows_merge_across_sentences() {
		let model = build("I am a cat. I am happy.");
		assert_eq!(model.freq(BEGIN, "I", "am"), Some(2));
		assert_eq!(model.freq("I", "am", "a"), Some(1));
		assert_eq!(model.freq("I", "am", "happy"), Some(1));
		assert_eq!(model.freq("cat", ".", END), Some(1));
		assert_eq!(model.freq("happy", ".", END), Some(1));
	}

	#[test]
	fn interior_counts_aggregate_within_a_sentence() {
		// "la la la la ." has the interior window (la, la, la) twice.
		let model = build("la la la la .");
		assert_eq!(model.freq("la", "la", "la"), Some(2));
	}

	#[test]
	fn two_token_sentence_contributes_only_boundary_rows() {
		let model = build("Hi.");
		assert_eq!(model.len(), 2);
		assert_eq!(model.freq(BEGIN, "Hi", "."), Some(1));
		assert_eq!(model.freq("Hi", ".", END), Some(1));
	}

	#[test]
	fn one_token_sentence_contributes_nothing() {
		// The splitter yields "Hi" with no delimiter; one token only.
		let model = build("Hi");
		assert!(model.is_empty());
	}

	#[test]
	fn boundary_rows_stay_at_one_regardless_of_repetition() {
		// Five sentences starting identically still pin each per-sentence
		// boundary contribution to 1; merged count equals sentence count.
		let text = "go on. go on. go on. go on. go on.";
		let model = build(text);
		assert_eq!(model.freq(BEGIN, "go", "on"), Some(5));
		assert_eq!(model.freq("on", ".", END), Some(5));
	}

	#[test]
	fn rows_match_table_contents() {
		let model = build("I am a cat.");
		let rows = model.rows();
		assert_eq!(rows.len(), model.len());
		assert!(rows.iter().all(|row| row.freq >= 1));
	}

	#[test]
	fn inspect_formats_pipe_joined_lines() {
		let model = build("Hi.");
		let mut lines = model.inspect();
		lines.sort();
		assert!(lines.contains(&format!("{BEGIN}|Hi|. 1")));
		assert!(lines.contains(&format!("Hi|.|{END} 1")));
	}
}
