use std::path::PathBuf;

use thiserror::Error;

/// Closed set of error kinds surfaced by the core.
///
/// Each variant carries only the structured data a caller needs to react:
/// the offending path, the failing operation name, or the context that had
/// no observed continuation. All variants are recoverable at the boundary
/// the caller controls; none leaves the persisted store half-written.
#[derive(Error, Debug)]
pub enum Error {
	/// The requested corpus file does not exist under the asset root.
	#[error("corpus file not found: {}", path.display())]
	InputNotFound { path: PathBuf },

	/// An operation requiring a materialized model was invoked before
	/// any corpus was registered.
	#[error("no model registered before '{operation}' was called")]
	ModelNotBuilt { operation: &'static str },

	/// The persisted model file does not exist; checked before any query.
	#[error("no such model store: {}", path.display())]
	StoreNotFound { path: PathBuf },

	/// Generation reached a context with zero observed continuations.
	#[error("no continuation observed for context ({prefix1}, {prefix2:?})")]
	DeadEnd {
		prefix1: String,
		prefix2: Option<String>,
	},

	/// A single sentence walk exceeded the configured step cap.
	#[error("sentence generation exceeded {limit} sampling steps")]
	StepLimit { limit: usize },

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("model encoding error: {0}")]
	Encoding(#[from] postcard::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
