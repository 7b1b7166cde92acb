use toml::Value;

use calldesk_config::{Config, Error};

const SAMPLE_CONFIG_TOML: &str = include_str!("fixtures/sample_config.toml");

fn sample_config() -> Config {
	toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.")
}

fn sample_with<F>(mutate: F) -> String
where
	F: FnOnce(&mut toml::Table),
{
	let mut value: Value =
		toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.");
	let root = value.as_table_mut().expect("Sample config must be a table.");

	mutate(root);

	toml::to_string(&value).expect("Failed to render sample config.")
}

#[test]
fn accepts_sample_config() {
	let cfg = sample_config();

	assert!(calldesk_config::validate(&cfg).is_ok());
	assert_eq!(cfg.entities.len(), 1);
	assert_eq!(cfg.entities[0].tag, "dormero-coburg");
}

#[test]
fn defaults_match_shipped_profile() {
	let minimal = "\
[service]
log_level = \"info\"

[storage.postgres]
dsn            = \"postgres://localhost/calldesk\"
pool_max_conns = 1
";
	let cfg: Config = toml::from_str(minimal).expect("Failed to parse minimal config.");

	assert!(calldesk_config::validate(&cfg).is_ok());
	assert_eq!(cfg.query.min_chars, 2);
	assert_eq!(cfg.query.max_chars, 500);
	assert_eq!(cfg.ranking.title_boost_weight, 0.15);
	assert_eq!(cfg.ranking.entity_boost_weight, 0.25);
	assert_eq!(cfg.ranking.length_penalty, 0.05);
	assert_eq!(cfg.ranking.long_chunk_chars, 1_200);
	assert_eq!(cfg.answer.min_confidence, 0.35);
	assert_eq!(cfg.answer.max_snippets, 5);
	assert_eq!(cfg.answer.preview_max_chars, 180);
	assert!(cfg.entities.is_empty());
}

#[test]
fn rejects_zero_snippet_cap() {
	let raw = sample_with(|root| {
		let answer = root
			.get_mut("answer")
			.and_then(Value::as_table_mut)
			.expect("Sample config must include [answer].");

		answer.insert("max_snippets".to_string(), Value::Integer(0));
	});
	let cfg: Config = toml::from_str(&raw).expect("Failed to parse mutated config.");

	assert!(matches!(calldesk_config::validate(&cfg), Err(Error::Validation { .. })));
}

#[test]
fn rejects_out_of_range_min_confidence() {
	let raw = sample_with(|root| {
		let answer = root
			.get_mut("answer")
			.and_then(Value::as_table_mut)
			.expect("Sample config must include [answer].");

		answer.insert("min_confidence".to_string(), Value::Float(1.5));
	});
	let cfg: Config = toml::from_str(&raw).expect("Failed to parse mutated config.");

	assert!(matches!(calldesk_config::validate(&cfg), Err(Error::Validation { .. })));
}

#[test]
fn rejects_inverted_query_bounds() {
	let raw = sample_with(|root| {
		let query = root
			.get_mut("query")
			.and_then(Value::as_table_mut)
			.expect("Sample config must include [query].");

		query.insert("min_chars".to_string(), Value::Integer(10));
		query.insert("max_chars".to_string(), Value::Integer(5));
	});
	let cfg: Config = toml::from_str(&raw).expect("Failed to parse mutated config.");

	assert!(matches!(calldesk_config::validate(&cfg), Err(Error::Validation { .. })));
}

#[test]
fn rejects_empty_entity_keyword() {
	let raw = sample_with(|root| {
		let entities = root
			.get_mut("entities")
			.and_then(Value::as_array_mut)
			.expect("Sample config must include [[entities]].");
		let alias = entities[0].as_table_mut().expect("Entity alias must be a table.");

		alias.insert("keywords".to_string(), Value::Array(vec![Value::String(" ".to_string())]));
	});
	let cfg: Config = toml::from_str(&raw).expect("Failed to parse mutated config.");

	assert!(matches!(calldesk_config::validate(&cfg), Err(Error::Validation { .. })));
}
