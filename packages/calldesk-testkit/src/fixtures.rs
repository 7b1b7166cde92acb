use calldesk_storage::{docs::NewDocument, models::Document};
use uuid::Uuid;

const COBURG: &str = "dormero-coburg";

/// Seed chunks mirroring the shipped knowledge base: per-hotel policies plus
/// entity-less global policies, each row one pre-split chunk.
pub fn fixture_seed() -> Vec<NewDocument> {
	let chunk = |doc_type: &str, title: &str, text: &str, entity_tag: Option<&str>| NewDocument {
		doc_type: doc_type.to_string(),
		title: title.to_string(),
		chunk_text: text.to_string(),
		source_url: format!(
			"https://support.example.com/kb/{}",
			title.to_lowercase().replace(' ', "-"),
		),
		entity_tag: entity_tag.map(|tag| tag.to_string()),
		tags: None,
	};

	vec![
		chunk(
			"policy",
			"Parking Policy",
			"Parken am Hotel: Gäste können direkt hinterm Haus parken. Parking is available \
			 in the hotel garage for 12 Euro pro Nacht. Die Zufahrt ist über die Ketschengasse.",
			Some(COBURG),
		),
		chunk(
			"policy",
			"Check-in und Check-out",
			"Check-in ist ab 15:00 Uhr möglich, Check-out bis 11:00 Uhr. Early check-in auf \
			 Anfrage an der Rezeption.",
			Some(COBURG),
		),
		chunk(
			"policy",
			"Frühstück",
			"Das Frühstücksbuffet ist täglich von 6:30 bis 10:30 Uhr geöffnet. Breakfast is \
			 included in most rates.",
			Some(COBURG),
		),
		chunk(
			"policy",
			"Haustiere",
			"Hunde sind willkommen. Pets are welcome for a fee of 15 Euro pro Nacht, Futter- \
			 und Wassernapf stehen bereit.",
			Some(COBURG),
		),
		chunk(
			"policy",
			"Stornierungsbedingungen",
			"Kostenlose Stornierung bis 18:00 Uhr am Anreisetag. Cancellation after that time \
			 will be charged at the first night's rate.",
			None,
		),
		chunk(
			"policy",
			"WLAN im Hotel",
			"Kostenloses WLAN steht in allen Zimmern und im Lobby-Bereich zur Verfügung. The \
			 wifi password is available at the front desk.",
			None,
		),
	]
}

/// The seed corpus as ready-made rows for the in-memory source.
pub fn fixture_corpus() -> Vec<Document> {
	fixture_seed()
		.into_iter()
		.map(|doc| Document {
			doc_id: Uuid::new_v4(),
			doc_type: doc.doc_type,
			title: doc.title,
			chunk_text: doc.chunk_text,
			source_url: doc.source_url,
			entity_tag: doc.entity_tag,
			tags: doc.tags,
		})
		.collect()
}
