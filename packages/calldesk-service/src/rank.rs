use std::cmp::Ordering;

use calldesk_config::Ranking;
use calldesk_domain::tokenize::tokenize;
use calldesk_storage::models::Document;

/// A candidate document with its relevance score and match diagnostics.
#[derive(Debug, Clone)]
pub struct ScoredDocument {
	pub doc: Document,
	/// Final score after boosts and penalty, clamped into [0, 1].
	pub score: f32,
	pub overlap_count: usize,
	pub matched_tokens: Vec<String>,
}

/// Scores one document against the tokenized query.
///
/// Matching is substring containment against the lower-cased title+chunk
/// haystack, not word-boundary equality. A token matches even inside a longer
/// word; this rewards compound forms like "Parkplatz" for the token "park"
/// and is kept on purpose.
pub fn score_document(
	query_tokens: &[String],
	doc: &Document,
	preferred_entity_tag: Option<&str>,
	weights: &Ranking,
) -> ScoredDocument {
	let haystack = format!("{} {}", doc.title, doc.chunk_text).to_lowercase();
	let matched_tokens: Vec<String> =
		query_tokens.iter().filter(|token| haystack.contains(token.as_str())).cloned().collect();
	let overlap_count = matched_tokens.len();

	// Base overlap, normalized by query token count.
	let base = if query_tokens.is_empty() {
		0.0
	} else {
		overlap_count as f32 / query_tokens.len() as f32
	};

	// Tokens appearing in the title signal the document is "about" the topic.
	let title_lower = doc.title.to_lowercase();
	let title_matches =
		query_tokens.iter().filter(|token| title_lower.contains(token.as_str())).count();
	let title_boost = if query_tokens.is_empty() {
		0.0
	} else {
		(title_matches as f32 / query_tokens.len() as f32) * weights.title_boost_weight
	};

	// Strong tie-breaker toward the caller's known context.
	let entity_boost = match (preferred_entity_tag, doc.entity_tag.as_deref()) {
		(Some(preferred), Some(tag)) if preferred == tag => weights.entity_boost_weight,
		_ => 0.0,
	};

	// Long chunks pick up incidental token occurrences; tax them slightly.
	let length_penalty = if doc.chunk_text.chars().count() > weights.long_chunk_chars {
		weights.length_penalty
	} else {
		0.0
	};

	let score = (base + title_boost + entity_boost - length_penalty).clamp(0.0, 1.0);

	ScoredDocument { doc: doc.clone(), score, overlap_count, matched_tokens }
}

/// Scores every candidate, sorts descending by score, and derives an
/// aggregate confidence from the top two scores.
///
/// The sort is stable, so equal-score documents keep their input order. The
/// confidence blend discounts a single high outlier by requiring weak
/// corroboration from a second candidate; it is a bounded heuristic, not a
/// probability.
pub fn rank_documents(
	query: &str,
	documents: &[Document],
	preferred_entity_tag: Option<&str>,
	weights: &Ranking,
) -> (Vec<ScoredDocument>, f32) {
	let query_tokens = tokenize(query);
	let mut ranked: Vec<ScoredDocument> = documents
		.iter()
		.map(|doc| score_document(&query_tokens, doc, preferred_entity_tag, weights))
		.collect();

	ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

	let best = ranked.first().map(|item| item.score).unwrap_or(0.0);
	let second = ranked.get(1).map(|item| item.score).unwrap_or(0.0);
	let confidence = (best * weights.confidence_best_weight
		+ second * weights.confidence_second_weight)
		.clamp(0.0, 1.0);

	(ranked, confidence)
}
