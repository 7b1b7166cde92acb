pub mod format;
pub mod rank;
pub mod retrieve;

mod error;

pub use error::{Error, Result};
pub use format::{FALLBACK_TEXT, RetrievalResult, Snippet};
pub use rank::ScoredDocument;
pub use retrieve::RetrieveRequest;

use std::{future::Future, pin::Pin, sync::Arc};

use calldesk_config::Config;
use calldesk_domain::entity;
use calldesk_storage::{db::Db, docs, models::Document};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Read-all seam over the document store. The engine always requests the full
/// candidate set; replacing this with an indexed/filtered backend must not
/// change ranking semantics.
pub trait DocumentSource
where
	Self: Send + Sync,
{
	fn list_documents<'a>(&'a self) -> BoxFuture<'a, Result<Vec<Document>>>;
}

/// Best-effort entity-tag guess from raw query text, consulted only when the
/// caller supplies no explicit hint.
pub trait EntityInference
where
	Self: Send + Sync,
{
	fn infer_entity_tag(&self, query: &str) -> Option<String>;
}

#[derive(Clone)]
pub struct Providers {
	pub documents: Arc<dyn DocumentSource>,
	pub entities: Arc<dyn EntityInference>,
}

pub struct CalldeskService {
	pub cfg: Config,
	pub providers: Providers,
}

struct PgDocuments {
	db: Arc<Db>,
}

/// Keyword-alias entity inference driven by the `[[entities]]` config
/// section. The default provider wired by [`CalldeskService::new`].
pub struct AliasEntityInference {
	aliases: Vec<calldesk_config::EntityAlias>,
}
impl AliasEntityInference {
	pub fn new(aliases: Vec<calldesk_config::EntityAlias>) -> Self {
		Self { aliases }
	}
}

impl DocumentSource for PgDocuments {
	fn list_documents<'a>(&'a self) -> BoxFuture<'a, Result<Vec<Document>>> {
		Box::pin(async move { Ok(docs::list_documents(&self.db.pool).await?) })
	}
}

impl EntityInference for AliasEntityInference {
	fn infer_entity_tag(&self, query: &str) -> Option<String> {
		entity::infer_entity_tag(query, &self.aliases)
	}
}

impl Providers {
	pub fn new(documents: Arc<dyn DocumentSource>, entities: Arc<dyn EntityInference>) -> Self {
		Self { documents, entities }
	}
}

impl CalldeskService {
	pub fn new(cfg: Config, db: Arc<Db>) -> Self {
		let entities = Arc::new(AliasEntityInference::new(cfg.entities.clone()));
		let providers = Providers { documents: Arc::new(PgDocuments { db }), entities };

		Self { cfg, providers }
	}

	pub fn with_providers(cfg: Config, providers: Providers) -> Self {
		Self { cfg, providers }
	}
}
