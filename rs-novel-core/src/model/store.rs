use std::fs;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::builder::FrequencyModel;
use super::triplet::TripletRow;
use crate::error::{Error, Result};

/// Persisted triplet-frequency relation.
///
/// The relation is a flat sequence of `TripletRow`s stored in a single
/// postcard-encoded file, with no uniqueness constraint: repeated saves
/// append duplicate rows rather than merging them. Rebuilding a store
/// from scratch goes through `init` (or `save` with `init = true`).
///
/// # Responsibilities
/// - Bulk-insert the flattened frequency model, all-or-nothing
/// - Hand out read snapshots for prefix-conditioned lookup
///
/// The store holds no state beyond the file path; every operation is a
/// self-contained acquisition and release of the underlying file.
#[derive(Clone, Debug)]
pub struct TripletStore {
	path: PathBuf,
}

impl TripletStore {
	pub fn new<P: AsRef<Path>>(path: P) -> Self {
		Self { path: path.as_ref().to_owned() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Initializes the relation to an empty row set.
	///
	/// Destructive, like re-running a schema script that drops and
	/// recreates the table. Callers invoke it once per fresh store.
	pub fn init(&self) -> Result<()> {
		self.write_rows(&[])
	}

	/// Persists the model as one row per (triplet, count) pair.
	///
	/// - With `init`, the existing row set is discarded first
	/// - Without it, new rows are appended after the existing ones, so
	///   saving the same model twice doubles every row
	///
	/// The write is all-or-nothing: rows land in a temporary file that
	/// atomically replaces the store file, so a failed save leaves the
	/// previous contents intact.
	pub fn save(&self, model: &FrequencyModel, init: bool) -> Result<()> {
		let mut rows = if init || !self.path.exists() {
			Vec::new()
		} else {
			self.read_rows()?
		};
		rows.extend(model.rows());

		self.write_rows(&rows)?;
		tracing::info!(rows = rows.len(), path = %self.path.display(), "model saved");
		Ok(())
	}

	/// Acquires a read snapshot of the full relation.
	///
	/// A missing store file surfaces as `Error::StoreNotFound` before any
	/// query runs. The snapshot is released by dropping it.
	pub fn open(&self) -> Result<Snapshot> {
		Ok(Snapshot { rows: self.read_rows()? })
	}

	fn read_rows(&self) -> Result<Vec<TripletRow>> {
		if !self.path.exists() {
			return Err(Error::StoreNotFound { path: self.path.clone() });
		}
		let bytes = fs::read(&self.path)?;
		Ok(postcard::from_bytes(&bytes)?)
	}

	pub(crate) fn write_rows(&self, rows: &[TripletRow]) -> Result<()> {
		let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
		fs::create_dir_all(parent)?;

		let bytes = postcard::to_stdvec(&rows)?;
		let temp_file = NamedTempFile::new_in(parent)?;
		fs::write(temp_file.path(), bytes)?;
		temp_file.persist(&self.path).map_err(|e| Error::Io(e.error))?;
		Ok(())
	}
}

/// Read snapshot of the relation, scoped to one query batch.
///
/// Row order is the file order and therefore deterministic for a fixed
/// underlying store.
#[derive(Clone, Debug)]
pub struct Snapshot {
	rows: Vec<TripletRow>,
}

impl Snapshot {
	/// Returns all rows matching `prefix1` exactly, further restricted to
	/// `prefix2` when supplied.
	///
	/// A context never observed during build yields an empty result set.
	pub fn query_by_prefix(&self, prefix1: &str, prefix2: Option<&str>) -> Vec<&TripletRow> {
		self.rows
			.iter()
			.filter(|row| row.prefix1 == prefix1)
			.filter(|row| prefix2.is_none_or(|p2| row.prefix2 == p2))
			.collect()
	}

	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}
}
