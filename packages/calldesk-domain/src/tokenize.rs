/// Fixed bilingual stop-word list covering common German and English function
/// words (articles, conjunctions, prepositions). Deliberately a compile-time
/// constant, not call-time configuration.
const STOPWORDS: &[&str] = &[
	"der", "die", "das", "und", "oder", "ein", "eine", "einer", "eines", "im", "in", "am", "an",
	"auf", "zu", "zum", "zur", "mit", "von", "für", "the", "and", "or", "a", "an", "to", "of",
	"is", "are",
];

pub fn is_stopword(token: &str) -> bool {
	STOPWORDS.contains(&token)
}

/// Normalizes free text into comparable tokens: lower-cases, maps every
/// character that is not a Unicode letter, digit, or whitespace to a space,
/// splits on whitespace runs, then drops single-character tokens and
/// stop-words. Pure and total; empty input yields an empty vec.
pub fn tokenize(input: &str) -> Vec<String> {
	let mut normalized = String::with_capacity(input.len());

	for ch in input.chars() {
		if ch.is_alphanumeric() || ch.is_whitespace() {
			for lower in ch.to_lowercase() {
				normalized.push(lower);
			}
		} else {
			normalized.push(' ');
		}
	}

	normalized
		.split_whitespace()
		.filter(|token| token.chars().count() >= 2)
		.filter(|token| !is_stopword(token))
		.map(|token| token.to_string())
		.collect()
}
