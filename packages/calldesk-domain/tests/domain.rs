use calldesk_config::EntityAlias;
use calldesk_domain::{entity, tokenize};

#[test]
fn tokenizes_empty_input_to_nothing() {
	assert!(tokenize::tokenize("").is_empty());
	assert!(tokenize::tokenize("   \t\n").is_empty());
}

#[test]
fn drops_stopwords_and_short_tokens() {
	assert!(tokenize::tokenize("Und der die").is_empty());
	assert!(tokenize::tokenize("a I x").is_empty());
	assert_eq!(tokenize::tokenize("the parking garage"), vec!["parking", "garage"]);
}

#[test]
fn strips_punctuation_without_merging_words() {
	assert_eq!(tokenize::tokenize("check-in: 15:00 Uhr!"), vec!["check", "15", "00", "uhr"]);
	assert_eq!(tokenize::tokenize("Wi-Fi/WLAN"), vec!["wi", "fi", "wlan"]);
}

#[test]
fn keeps_unicode_letters_and_digits() {
	assert_eq!(
		tokenize::tokenize("Frühstück ab 6:30 für Gäste"),
		vec!["frühstück", "ab", "30", "gäste"],
	);
}

#[test]
fn tokenizing_is_deterministic_and_ordered() {
	let left = tokenize::tokenize("Parken am DORMERO Hotel Coburg");
	let right = tokenize::tokenize("Parken am DORMERO Hotel Coburg");

	assert_eq!(left, right);
	assert_eq!(left, vec!["parken", "dormero", "hotel", "coburg"]);
}

#[test]
fn symbol_only_input_yields_nothing() {
	assert!(tokenize::tokenize("!?!? -- ... €€€").is_empty());
}

#[test]
fn infers_entity_tag_from_keyword() {
	let aliases = vec![EntityAlias {
		tag: "dormero-coburg".to_string(),
		keywords: vec!["coburg".to_string()],
	}];

	assert_eq!(
		entity::infer_entity_tag("Wo kann ich in Coburg parken?", &aliases),
		Some("dormero-coburg".to_string()),
	);
	assert_eq!(entity::infer_entity_tag("parking at the airport", &aliases), None);
}

#[test]
fn first_matching_alias_wins() {
	let aliases = vec![
		EntityAlias { tag: "dormero-coburg".to_string(), keywords: vec!["coburg".to_string()] },
		EntityAlias { tag: "dormero-plauen".to_string(), keywords: vec!["plauen".to_string()] },
	];

	assert_eq!(
		entity::infer_entity_tag("Coburg oder Plauen?", &aliases),
		Some("dormero-coburg".to_string()),
	);
}
