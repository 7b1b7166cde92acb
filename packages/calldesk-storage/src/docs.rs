use sqlx::PgExecutor;
use uuid::Uuid;

use crate::{Result, models::Document};

/// Chunk payload for seeding. `doc_id` is assigned on insert.
#[derive(Debug, Clone)]
pub struct NewDocument {
	pub doc_type: String,
	pub title: String,
	pub chunk_text: String,
	pub source_url: String,
	pub entity_tag: Option<String>,
	pub tags: Option<String>,
}

/// Full scan in insertion order. The engine ranks every candidate, so no
/// filtering or pagination happens here; an indexed backend can replace this
/// query without touching ranking semantics.
pub async fn list_documents<'e, E>(executor: E) -> Result<Vec<Document>>
where
	E: PgExecutor<'e>,
{
	let docs = sqlx::query_as::<_, Document>(
		"\
SELECT doc_id, doc_type, title, chunk_text, source_url, entity_tag, tags
FROM documents
ORDER BY seq",
	)
	.fetch_all(executor)
	.await?;

	Ok(docs)
}

pub async fn insert_document<'e, E>(executor: E, doc: &NewDocument) -> Result<Uuid>
where
	E: PgExecutor<'e>,
{
	let doc_id = Uuid::new_v4();

	sqlx::query(
		"\
INSERT INTO documents (doc_id, doc_type, title, chunk_text, source_url, entity_tag, tags)
VALUES ($1,$2,$3,$4,$5,$6,$7)",
	)
	.bind(doc_id)
	.bind(doc.doc_type.as_str())
	.bind(doc.title.as_str())
	.bind(doc.chunk_text.as_str())
	.bind(doc.source_url.as_str())
	.bind(doc.entity_tag.as_deref())
	.bind(doc.tags.as_deref())
	.execute(executor)
	.await?;

	Ok(doc_id)
}

/// Deterministic reseed: drops every existing document, then inserts the
/// given chunks in order within one transaction.
pub async fn replace_documents(db: &crate::db::Db, docs: &[NewDocument]) -> Result<Vec<Uuid>> {
	let mut tx = db.pool.begin().await?;

	sqlx::query("DELETE FROM documents").execute(&mut *tx).await?;

	let mut ids = Vec::with_capacity(docs.len());

	for doc in docs {
		ids.push(insert_document(&mut *tx, doc).await?);
	}

	tx.commit().await?;

	Ok(ids)
}
