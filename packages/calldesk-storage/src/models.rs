use serde_json::Value;
use time::OffsetDateTime;
use uuid::Uuid;

/// A pre-chunked unit of knowledge. Documents are split upstream; each row is
/// one retrievable chunk with its own title and source URL.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Document {
	pub doc_id: Uuid,
	pub doc_type: String,
	pub title: String,
	pub chunk_text: String,
	pub source_url: String,
	pub entity_tag: Option<String>,
	pub tags: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CallRecord {
	pub call_id: Uuid,
	pub started_at: OffsetDateTime,
	pub entity_tag: Option<String>,
	pub status: String,
}

/// One retrieval invocation with its serialized result, persisted by the
/// boundary after the engine returns. Replayable verbatim.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ToolInvocation {
	pub invocation_id: Uuid,
	pub call_id: Uuid,
	pub query: String,
	pub results_json: Value,
	pub confidence: f32,
	pub ts: OffsetDateTime,
}
