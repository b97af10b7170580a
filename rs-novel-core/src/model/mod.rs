//! Top-level module for the triplet Markov model.
//!
//! This crate provides a morpheme-triplet sentence generator, including:
//! - Sentence splitting (`splitter`) and the tokenizer boundary (`tokenizer`)
//! - Triplet frequency aggregation (`FrequencyModel`)
//! - A persisted triplet relation (`TripletStore`)
//! - A high-level generation interface (`Generator`)
//! - A registration facade (`Novelizer`)

/// Triplet value types and the sentence boundary sentinels.
///
/// `Triplet` is the in-memory aggregation key; `TripletRow` is its
/// flattened, persisted form.
pub mod triplet;

/// Sentence splitter collaborator.
///
/// Splits raw text into trimmed sentences on a fixed delimiter set.
pub mod splitter;

/// Tokenizer boundary.
///
/// The core treats tokenization as an opaque capability behind the
/// `Tokenize` trait; a simple word-level implementation is provided.
pub mod tokenizer;

/// Frequency model builder.
///
/// Converts a raw corpus into aggregated triplet occurrence counts,
/// with sentence boundary rows pinned to count 1.
pub mod builder;

/// Persisted triplet store.
///
/// Saves the flattened frequency table and answers prefix-conditioned
/// lookups through read snapshots.
pub mod store;

/// High-level interface for generating sentences from a store.
///
/// Performs the weighted random walk over triplet continuations.
pub mod generator;

/// Registration facade over the builder and store.
///
/// Holds the corpus model explicitly between register/build/save calls;
/// there is no ambient global model.
pub mod novelizer;
