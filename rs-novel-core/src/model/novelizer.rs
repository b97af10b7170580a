use std::path::{Path, PathBuf};

use super::builder::FrequencyModel;
use super::store::TripletStore;
use super::tokenizer::{Tokenize, WordTokenizer};
use crate::error::{Error, Result};
use crate::io;

/// Registration facade over the builder and store.
///
/// Holds the built `FrequencyModel` explicitly between `register` and the
/// operations that need it; the caller owns the `Novelizer`, so there is
/// no ambient global model. Any model-requiring call made before a corpus
/// has been registered fails with `Error::ModelNotBuilt` naming the
/// operation, with no partial execution.
pub struct Novelizer {
	asset_root: PathBuf,
	tokenizer: Box<dyn Tokenize>,
	model: Option<FrequencyModel>,
}

impl Novelizer {
	/// Creates a novelizer reading corpus files under `asset_root`,
	/// tokenizing with the default word-level tokenizer.
	pub fn new<P: AsRef<Path>>(asset_root: P) -> Self {
		Self::with_tokenizer(asset_root, Box::new(WordTokenizer))
	}

	/// Creates a novelizer with a custom tokenizer, e.g. a morphological
	/// analyzer for scripts without word separators.
	pub fn with_tokenizer<P: AsRef<Path>>(asset_root: P, tokenizer: Box<dyn Tokenize>) -> Self {
		Self {
			asset_root: asset_root.as_ref().to_owned(),
			tokenizer,
			model: None,
		}
	}

	/// Registers the corpus and builds its frequency model.
	///
	/// When `text` is given and non-empty it is used directly; otherwise
	/// `file` is read relative to the asset root. In-memory text takes
	/// precedence over the file.
	pub fn register(&mut self, file: &str, text: Option<&str>) -> Result<()> {
		let text = match text {
			Some(text) if !text.is_empty() => text.to_owned(),
			_ => io::read_corpus(&self.asset_root, file)?,
		};

		self.model = Some(FrequencyModel::build(&text, self.tokenizer.as_ref()));
		Ok(())
	}

	/// Registers an in-memory corpus directly.
	pub fn register_text(&mut self, text: &str) {
		self.model = Some(FrequencyModel::build(text, self.tokenizer.as_ref()));
	}

	/// The built model, if any corpus has been registered.
	pub fn model(&self) -> Option<&FrequencyModel> {
		self.model.as_ref()
	}

	/// Materializes the model into the given store.
	///
	/// With `init`, the store is reset first; the usual choice for a
	/// fresh build.
	pub fn save(&self, store: &TripletStore, init: bool) -> Result<()> {
		let model = self.require_model("save")?;
		store.save(model, init)
	}

	/// Returns the model listing as `prefix1|prefix2|suffix freq` lines.
	pub fn inspect(&self) -> Result<Vec<String>> {
		Ok(self.require_model("inspect")?.inspect())
	}

	fn require_model(&self, operation: &'static str) -> Result<&FrequencyModel> {
		self.model
			.as_ref()
			.ok_or(Error::ModelNotBuilt { operation })
	}
}
