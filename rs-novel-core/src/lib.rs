//! Markov-chain sentence generation library.
//!
//! This crate builds a statistical language model from a corpus of text
//! and generates new sentences from it, including:
//! - Sentence splitting and a pluggable tokenizer boundary
//! - Triplet (2-token prefix, 1-token suffix) frequency aggregation
//! - A persisted, prefix-queryable triplet store
//! - Probabilistic sentence generation by weighted random walk
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core model building, persistence and generation logic.
///
/// This module exposes the high-level builder/store/generator interface
/// while keeping internal representations private.
pub mod model;

/// Error kinds shared across the crate.
pub mod error;

/// I/O utilities (corpus loading, path helpers).
///
/// Not exposed
pub(crate) mod io;
