use rand::Rng;

use super::store::{Snapshot, TripletStore};
use super::triplet::{TripletRow, BEGIN, END};
use crate::error::{Error, Result};

/// Default cap on sampling steps per sentence.
///
/// Converts a degenerate walk (a cycle never reaching END) into a
/// bounded `Error::StepLimit` instead of an unbounded loop.
pub const DEFAULT_MAX_STEPS: usize = 1000;

/// High-level interface generating sentences from a persisted store.
///
/// # Responsibilities
/// - Acquire one read snapshot per generation batch and release it on
///   every exit path
/// - Walk the Markov chain: sample a BEGIN continuation, then repeatedly
///   sample a suffix conditioned on the trailing two tokens until END
/// - Surface dead ends and runaway walks as explicit errors
///
/// Generation never mutates the store; independent batches may run
/// against their own snapshots.
#[derive(Clone, Debug)]
pub struct Generator {
	store: TripletStore,
	max_steps: usize,
}

impl Generator {
	pub fn new(store: TripletStore) -> Self {
		Self { store, max_steps: DEFAULT_MAX_STEPS }
	}

	/// Overrides the per-sentence step cap.
	pub fn with_max_steps(mut self, max_steps: usize) -> Self {
		self.max_steps = max_steps;
		self
	}

	/// Generates `n` sentences.
	///
	/// - `n == 0` returns an empty list without touching the store
	/// - A missing store is reported once, before any sampling
	/// - A failed sentence discards its partial output; nothing truncated
	///   is ever returned
	pub fn generate(&self, n: usize) -> Result<Vec<String>> {
		if n == 0 {
			return Ok(Vec::new());
		}

		let snapshot = self.store.open()?;
		let mut rng = rand::rng();

		let sentences = (0..n)
			.map(|_| self.generate_sentence(&snapshot, &mut rng))
			.collect::<Result<Vec<_>>>()?;

		tracing::debug!(count = sentences.len(), "generation batch complete");
		Ok(sentences)
	}

	/// Generates one sentence by weighted random walk.
	///
	/// The emitted END sentinel terminates the walk and is excluded from
	/// the joined output; tokens are joined with no separator.
	fn generate_sentence<R: Rng>(&self, snapshot: &Snapshot, rng: &mut R) -> Result<String> {
		let mut morphemes: Vec<String> = Vec::new();

		let first = sample_continuation(snapshot, BEGIN, None, rng)?;
		morphemes.push(first.prefix2.clone());
		morphemes.push(first.suffix.clone());

		let mut steps = 0;
		while morphemes[morphemes.len() - 1] != END {
			if steps >= self.max_steps {
				return Err(Error::StepLimit { limit: self.max_steps });
			}
			steps += 1;

			let prefix1 = &morphemes[morphemes.len() - 2];
			let prefix2 = &morphemes[morphemes.len() - 1];
			let suffix = sample_continuation(snapshot, prefix1, Some(prefix2), rng)?
				.suffix
				.clone();
			morphemes.push(suffix);
		}

		morphemes.pop();
		Ok(morphemes.concat())
	}
}

/// Samples one continuation row for a context, weighted by frequency.
///
/// An empty candidate set means the context was never observed during
/// build and surfaces as `Error::DeadEnd` naming that context.
fn sample_continuation<'a, R: Rng>(
	snapshot: &'a Snapshot,
	prefix1: &str,
	prefix2: Option<&str>,
	rng: &mut R,
) -> Result<&'a TripletRow> {
	let candidates = snapshot.query_by_prefix(prefix1, prefix2);
	pick_weighted(&candidates, rng).ok_or_else(|| Error::DeadEnd {
		prefix1: prefix1.to_owned(),
		prefix2: prefix2.map(str::to_owned),
	})
}

/// Weighted random selection over candidate rows.
///
/// Equivalent to drawing uniformly from a virtual population where each
/// candidate appears `freq` times: selection probability is exactly
/// proportional to frequency, and ties are resolved by the draw alone.
///
/// Performs an O(n) cumulative scan instead of materializing the
/// population. Returns `None` when there are no candidates.
fn pick_weighted<'a, R: Rng>(candidates: &[&'a TripletRow], rng: &mut R) -> Option<&'a TripletRow> {
	let total: u64 = candidates.iter().map(|row| u64::from(row.freq)).sum();
	if total == 0 {
		return None;
	}

	let mut r = rng.random_range(0..total);
	for row in candidates {
		if r < u64::from(row.freq) {
			return Some(row);
		}
		r -= u64::from(row.freq);
	}

	// Unreachable: r starts below the summed frequencies.
	None
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::builder::FrequencyModel;
	use crate::model::tokenizer::WordTokenizer;
	use crate::model::triplet::Triplet;
	use rand::rngs::StdRng;
	use rand::SeedableRng;

	fn row(prefix1: &str, prefix2: &str, suffix: &str, freq: u32) -> TripletRow {
		TripletRow::new(&Triplet::new(prefix1, prefix2, suffix), freq)
	}

	fn store_with_rows(dir: &tempfile::TempDir, rows: &[TripletRow]) -> TripletStore {
		let store = TripletStore::new(dir.path().join("model.bin"));
		store.write_rows(rows).unwrap();
		store
	}

	#[test]
	fn generate_zero_needs_no_store() {
		let store = TripletStore::new("/nonexistent/model.bin");
		let sentences = Generator::new(store).generate(0).unwrap();
		assert!(sentences.is_empty());
	}

	#[test]
	fn missing_store_is_reported_once_up_front() {
		let store = TripletStore::new("/nonexistent/model.bin");
		match Generator::new(store).generate(3) {
			Err(Error::StoreNotFound { .. }) => {}
			other => panic!("expected StoreNotFound, got {other:?}"),
		}
	}

	#[test]
	fn single_path_store_generates_the_only_sentence() {
		let dir = tempfile::tempdir().unwrap();
		let store = store_with_rows(
			&dir,
			&[
				row(BEGIN, "hello", "world", 1),
				row("hello", "world", END, 1),
			],
		);

		let sentences = Generator::new(store).generate(3).unwrap();
		assert_eq!(sentences, vec!["helloworld"; 3]);
	}

	#[test]
	fn generates_from_a_built_model() {
		let dir = tempfile::tempdir().unwrap();
		let store = TripletStore::new(dir.path().join("model.bin"));
		let model = FrequencyModel::build("I am a cat. I am happy.", &WordTokenizer);
		store.save(&model, true).unwrap();

		for sentence in Generator::new(store).generate(20).unwrap() {
			assert!(sentence.starts_with("Iam"));
			assert!(sentence.ends_with('.'));
			assert!(!sentence.contains(END));
		}
	}

	#[test]
	fn unreachable_context_is_a_dead_end() {
		// BEGIN leads to (a, b), but (a, b) has no continuation.
		let dir = tempfile::tempdir().unwrap();
		let store = store_with_rows(&dir, &[row(BEGIN, "a", "b", 1)]);

		match Generator::new(store).generate(1) {
			Err(Error::DeadEnd { prefix1, prefix2 }) => {
				assert_eq!(prefix1, "a");
				assert_eq!(prefix2.as_deref(), Some("b"));
			}
			other => panic!("expected DeadEnd, got {other:?}"),
		}
	}

	#[test]
	fn cyclic_store_hits_the_step_cap() {
		// (a, b) -> a and (b, a) -> b cycle forever without END.
		let dir = tempfile::tempdir().unwrap();
		let store = store_with_rows(
			&dir,
			&[
				row(BEGIN, "a", "b", 1),
				row("a", "b", "a", 1),
				row("b", "a", "b", 1),
			],
		);

		match Generator::new(store).with_max_steps(50).generate(1) {
			Err(Error::StepLimit { limit }) => assert_eq!(limit, 50),
			other => panic!("expected StepLimit, got {other:?}"),
		}
	}

	#[test]
	fn weighted_pick_converges_to_frequency_ratio() {
		let heavy = row("x", "y", "often", 3);
		let light = row("x", "y", "rarely", 1);
		let candidates = vec![&heavy, &light];

		let mut rng = StdRng::seed_from_u64(42);
		let trials = 100_000;
		let mut heavy_hits = 0usize;
		for _ in 0..trials {
			if pick_weighted(&candidates, &mut rng).unwrap().suffix == "often" {
				heavy_hits += 1;
			}
		}

		// Expected ratio 3:1 -> 75% within a generous tolerance.
		let ratio = heavy_hits as f64 / trials as f64;
		assert!((ratio - 0.75).abs() < 0.01, "observed ratio {ratio}");
	}

	#[test]
	fn weighted_pick_on_empty_candidates_is_none() {
		let mut rng = StdRng::seed_from_u64(0);
		assert!(pick_weighted(&[], &mut rng).is_none());
	}
}
