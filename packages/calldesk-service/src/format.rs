use calldesk_config::Answer;
use serde::{Deserialize, Serialize};

/// Returned instead of any synthesized draft when confidence is too low or
/// nothing matched. Invariant literal; the audit log stores it verbatim.
pub const FALLBACK_TEXT: &str =
	"Dazu habe ich gerade keine verlässlichen Infos. Soll ich dich mit dem Team verbinden?";

const LEAD_IN: &str = "Hier ist, was ich dazu in unseren Unterlagen gefunden habe.";
const GENERIC_FOUND: &str = "Ich habe passende Informationen gefunden.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
	pub title: String,
	pub text: String,
	pub source_url: String,
	pub entity_tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalResult {
	pub answer_draft: String,
	pub snippets: Vec<Snippet>,
	pub confidence: f32,
}

/// Collapses internal whitespace and truncates to `max_chars` characters,
/// replacing the last kept character with a single trailing ellipsis when
/// clipping happens.
fn clip(text: &str, max_chars: usize) -> String {
	let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

	if collapsed.chars().count() <= max_chars {
		return collapsed;
	}

	let mut clipped: String =
		collapsed.chars().take(max_chars.saturating_sub(1)).collect::<String>().trim_end().to_string();

	clipped.push('…');

	clipped
}

/// Confidence-gated presentation. Below the threshold (or with nothing to
/// show) this returns the fixed fallback and an empty snippet list; otherwise
/// a draft of up to three templated sentences referencing the top one or two
/// snippets. Confidence is passed through unchanged either way.
pub fn format_answer(snippets: Vec<Snippet>, confidence: f32, cfg: &Answer) -> RetrievalResult {
	if confidence < cfg.min_confidence || snippets.is_empty() {
		return RetrievalResult {
			answer_draft: FALLBACK_TEXT.to_string(),
			snippets: Vec::new(),
			confidence,
		};
	}

	let s1 = LEAD_IN.to_string();
	let s2 = match snippets.first() {
		Some(top) =>
			format!("Relevant ist vor allem: “{}”", clip(&top.text, cfg.preview_max_chars)),
		// Unreachable once the empty case is excluded above; kept so a future
		// reordering cannot panic here.
		None => GENERIC_FOUND.to_string(),
	};
	let s3 = snippets
		.get(1)
		.map(|second| format!("Zusätzlich gibt es Hinweise in “{}”.", second.title))
		.unwrap_or_default();
	let answer_draft = [s1, s2, s3]
		.into_iter()
		.filter(|sentence| !sentence.is_empty())
		.collect::<Vec<_>>()
		.join(" ");
	let mut snippets = snippets;

	snippets.truncate(cfg.max_snippets);

	RetrievalResult { answer_draft, snippets, confidence }
}
