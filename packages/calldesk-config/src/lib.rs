mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Answer, Config, EntityAlias, Postgres, Query, Ranking, Service, Storage};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;
	let cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if cfg.query.min_chars == 0 {
		return Err(Error::Validation {
			message: "query.min_chars must be greater than zero.".to_string(),
		});
	}
	if cfg.query.max_chars < cfg.query.min_chars {
		return Err(Error::Validation {
			message: "query.max_chars must be at least query.min_chars.".to_string(),
		});
	}

	for (name, value) in [
		("ranking.title_boost_weight", cfg.ranking.title_boost_weight),
		("ranking.entity_boost_weight", cfg.ranking.entity_boost_weight),
		("ranking.length_penalty", cfg.ranking.length_penalty),
		("ranking.confidence_best_weight", cfg.ranking.confidence_best_weight),
		("ranking.confidence_second_weight", cfg.ranking.confidence_second_weight),
	] {
		if !value.is_finite() {
			return Err(Error::Validation {
				message: format!("{name} must be a finite number."),
			});
		}
		if value < 0.0 {
			return Err(Error::Validation { message: format!("{name} must be zero or greater.") });
		}
	}

	if cfg.ranking.long_chunk_chars == 0 {
		return Err(Error::Validation {
			message: "ranking.long_chunk_chars must be greater than zero.".to_string(),
		});
	}
	if !cfg.answer.min_confidence.is_finite()
		|| !(0.0..=1.0).contains(&cfg.answer.min_confidence)
	{
		return Err(Error::Validation {
			message: "answer.min_confidence must be within [0, 1].".to_string(),
		});
	}
	if cfg.answer.max_snippets == 0 {
		return Err(Error::Validation {
			message: "answer.max_snippets must be greater than zero.".to_string(),
		});
	}
	if cfg.answer.preview_max_chars == 0 {
		return Err(Error::Validation {
			message: "answer.preview_max_chars must be greater than zero.".to_string(),
		});
	}

	for alias in &cfg.entities {
		if alias.tag.trim().is_empty() {
			return Err(Error::Validation {
				message: "entities.tag must be non-empty.".to_string(),
			});
		}
		if alias.keywords.iter().any(|keyword| keyword.trim().is_empty()) {
			return Err(Error::Validation {
				message: format!("entities.keywords must be non-empty for tag {}.", alias.tag),
			});
		}
	}

	Ok(())
}
