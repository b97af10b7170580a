/// Tokenizer boundary of the model.
///
/// Converts one sentence into an ordered sequence of token strings. The
/// core treats this as an opaque capability so that a morphological
/// analyzer can be plugged in for languages without word separators.
///
/// Implementations must never produce the reserved sentinel strings
/// (`triplet::BEGIN` / `triplet::END`); this is assumed of real corpora,
/// not enforced.
pub trait Tokenize {
	fn tokenize(&self, sentence: &str) -> Vec<String>;
}

/// Simple word-level tokenizer for space-separated scripts.
///
/// - Alphanumeric runs (plus `'`) form one token
/// - Any other non-whitespace character is a token of its own, so a
///   sentence-ending period becomes its own token
#[derive(Clone, Copy, Debug, Default)]
pub struct WordTokenizer;

impl Tokenize for WordTokenizer {
	fn tokenize(&self, sentence: &str) -> Vec<String> {
		let mut tokens = Vec::new();
		let mut current = String::new();

		for c in sentence.chars() {
			if c.is_alphanumeric() || c == '\'' {
				current.push(c);
			} else {
				if !current.is_empty() {
					tokens.push(std::mem::take(&mut current));
				}
				if !c.is_whitespace() {
					tokens.push(c.to_string());
				}
			}
		}
		if !current.is_empty() {
			tokens.push(current);
		}

		tokens
	}
}
