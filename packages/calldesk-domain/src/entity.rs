use calldesk_config::EntityAlias;

/// Best-effort entity inference over a configured alias list: the first alias
/// with a keyword occurring in the lower-cased query wins. Substring matching
/// keeps compound words like "Coburger" matching the "coburg" keyword.
pub fn infer_entity_tag(query: &str, aliases: &[EntityAlias]) -> Option<String> {
	let query = query.to_lowercase();

	for alias in aliases {
		if alias.keywords.iter().any(|keyword| query.contains(&keyword.to_lowercase())) {
			return Some(alias.tag.clone());
		}
	}

	None
}
