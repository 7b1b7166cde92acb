use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub query: Query,
	#[serde(default)]
	pub ranking: Ranking,
	#[serde(default)]
	pub answer: Answer,
	/// Optional. Keyword aliases used to infer an entity tag from free-text
	/// queries when the caller supplies no explicit hint.
	#[serde(default)]
	pub entities: Vec<EntityAlias>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Query {
	pub min_chars: usize,
	pub max_chars: usize,
}
impl Default for Query {
	fn default() -> Self {
		Self { min_chars: 2, max_chars: 500 }
	}
}

/// Weight profile for lexical scoring. Bound into the ranker at call time so
/// tests can substitute a different profile without process-wide state.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Ranking {
	pub title_boost_weight: f32,
	pub entity_boost_weight: f32,
	pub length_penalty: f32,
	pub long_chunk_chars: usize,
	pub confidence_best_weight: f32,
	pub confidence_second_weight: f32,
}
impl Default for Ranking {
	fn default() -> Self {
		Self {
			title_boost_weight: 0.15,
			entity_boost_weight: 0.25,
			length_penalty: 0.05,
			long_chunk_chars: 1_200,
			confidence_best_weight: 0.85,
			confidence_second_weight: 0.15,
		}
	}
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Answer {
	pub min_confidence: f32,
	pub max_snippets: usize,
	pub preview_max_chars: usize,
}
impl Default for Answer {
	fn default() -> Self {
		Self { min_confidence: 0.35, max_snippets: 5, preview_max_chars: 180 }
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntityAlias {
	pub tag: String,
	pub keywords: Vec<String>,
}
