use std::sync::Arc;

use calldesk_service::{BoxFuture, DocumentSource, EntityInference, Error, Result};
use calldesk_storage::models::Document;

/// In-memory document source preserving insertion order, standing in for the
/// Postgres-backed store in engine tests.
pub struct MemoryDocuments {
	docs: Vec<Document>,
}
impl MemoryDocuments {
	pub fn new(docs: Vec<Document>) -> Arc<Self> {
		Arc::new(Self { docs })
	}
}
impl DocumentSource for MemoryDocuments {
	fn list_documents<'a>(&'a self) -> BoxFuture<'a, Result<Vec<Document>>> {
		Box::pin(async move { Ok(self.docs.clone()) })
	}
}

/// A document source whose fetch always fails, for asserting that store
/// errors surface instead of degrading into an empty result.
pub struct FailingDocuments;
impl DocumentSource for FailingDocuments {
	fn list_documents<'a>(&'a self) -> BoxFuture<'a, Result<Vec<Document>>> {
		Box::pin(async move {
			Err(Error::Storage { message: "document store unavailable".to_string() })
		})
	}
}

/// Entity inference returning a fixed answer regardless of the query.
pub struct StaticEntityTag(pub Option<String>);
impl EntityInference for StaticEntityTag {
	fn infer_entity_tag(&self, _query: &str) -> Option<String> {
		self.0.clone()
	}
}
