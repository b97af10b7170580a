/// Sentence-ending delimiters: the CJK full stop and the Latin period.
/// A delimiter always stays attached to the sentence it ends.
const DELIMITERS: [char; 2] = ['。', '.'];

/// Splits raw text into an ordered sequence of sentences.
///
/// - Each delimiter in `DELIMITERS` ends the current sentence and is kept
///   as its last character (". " is covered because the following space
///   belongs to the next sentence and is trimmed away)
/// - Line breaks also end the current sentence
/// - Every sentence is trimmed of surrounding whitespace
/// - Empty sentences after trimming are dropped entirely
pub fn split(text: &str) -> Vec<String> {
	let mut sentences = Vec::new();
	let mut current = String::new();

	for c in text.chars() {
		match c {
			'\n' | '\r' => flush(&mut sentences, &mut current),
			_ if DELIMITERS.contains(&c) => {
				current.push(c);
				flush(&mut sentences, &mut current);
			}
			_ => current.push(c),
		}
	}
	flush(&mut sentences, &mut current);

	sentences
}

/// Trims the pending sentence and commits it if non-empty.
fn flush(sentences: &mut Vec<String>, current: &mut String) {
	let sentence = current.trim();
	if !sentence.is_empty() {
		sentences.push(sentence.to_owned());
	}
	current.clear();
}
