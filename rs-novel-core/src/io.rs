use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Resolves a corpus file name against the asset root.
///
/// The file name is joined as-is; no extension is assumed.
pub(crate) fn resolve_corpus<P: AsRef<Path>>(asset_root: P, file: &str) -> PathBuf {
	asset_root.as_ref().join(file)
}

/// Reads a corpus file under the asset root into a `String`.
///
/// - Reads the entire file into memory (UTF-8)
/// - A missing file surfaces as `Error::InputNotFound` rather than a raw
///   I/O error, so the caller can report the resolved path
pub(crate) fn read_corpus<P: AsRef<Path>>(asset_root: P, file: &str) -> Result<String> {
	let path = resolve_corpus(asset_root, file);
	if !path.is_file() {
		return Err(Error::InputNotFound { path });
	}

	let mut contents = String::new();
	File::open(&path)?.read_to_string(&mut contents)?;
	Ok(contents)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn read_corpus_returns_contents() {
		let dir = tempfile::tempdir().unwrap();
		let mut file = File::create(dir.path().join("title.txt")).unwrap();
		write!(file, "I am a cat.").unwrap();

		let text = read_corpus(dir.path(), "title.txt").unwrap();
		assert_eq!(text, "I am a cat.");
	}

	#[test]
	fn read_corpus_reports_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		match read_corpus(dir.path(), "missing.txt") {
			Err(Error::InputNotFound { path }) => {
				assert!(path.ends_with("missing.txt"));
			}
			other => panic!("expected InputNotFound, got {other:?}"),
		}
	}
}
