use tracing::debug;

use crate::{
	CalldeskService, Error, Result,
	format::{self, RetrievalResult, Snippet},
	rank,
};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RetrieveRequest {
	pub query: String,
	/// Explicit entity hint. When absent the entity-inference provider is
	/// consulted instead.
	pub entity_tag: Option<String>,
}

impl CalldeskService {
	/// The retrieval entry point: validates the query, resolves the entity
	/// tag, scans all candidate documents, ranks them, and shapes the
	/// confidence-gated answer. Persists nothing; the caller logs the result.
	pub async fn retrieve(&self, request: RetrieveRequest) -> Result<RetrievalResult> {
		let query_chars = request.query.chars().count();

		if query_chars < self.cfg.query.min_chars {
			return Err(Error::InvalidRequest { message: "Query too short.".to_string() });
		}
		if query_chars > self.cfg.query.max_chars {
			return Err(Error::InvalidRequest { message: "Query too long.".to_string() });
		}
		if let Some(tag) = request.entity_tag.as_deref()
			&& !(2_usize..=100).contains(&tag.chars().count())
		{
			return Err(Error::InvalidRequest {
				message: "Entity tag length is out of bounds.".to_string(),
			});
		}

		let entity_tag = request
			.entity_tag
			.clone()
			.or_else(|| self.providers.entities.infer_entity_tag(&request.query));
		// Store failures surface as retrieval failures. An empty corpus is a
		// valid (fallback) outcome; a fetch error never is.
		let documents = self.providers.documents.list_documents().await?;
		let (ranked, confidence) = rank::rank_documents(
			&request.query,
			&documents,
			entity_tag.as_deref(),
			&self.cfg.ranking,
		);
		let snippets: Vec<Snippet> = ranked
			.into_iter()
			.filter(|item| item.score > 0.0)
			.take(self.cfg.answer.max_snippets)
			.map(|item| Snippet {
				title: item.doc.title,
				text: item.doc.chunk_text,
				source_url: item.doc.source_url,
				entity_tag: item.doc.entity_tag,
			})
			.collect();

		debug!(
			candidates = documents.len(),
			kept = snippets.len(),
			confidence,
			entity_tag = entity_tag.as_deref(),
			"Ranked candidate documents."
		);

		Ok(format::format_answer(snippets, confidence, &self.cfg.answer))
	}
}
