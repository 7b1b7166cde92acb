//! Live-Postgres coverage, gated on CALLDESK_PG_DSN so the default test run
//! stays hermetic.

use serde_json::json;
use time::OffsetDateTime;

use calldesk_config::Postgres;
use calldesk_storage::{audit, db::Db, docs};
use calldesk_testkit::{TestDatabase, fixtures};

async fn connect(test_db: &TestDatabase) -> Db {
	let db = Db::connect(&Postgres { dsn: test_db.dsn().to_string(), pool_max_conns: 2 })
		.await
		.expect("Failed to connect to test database.");

	db.ensure_schema().await.expect("Failed to apply schema.");

	db
}

#[tokio::test]
async fn seeds_and_lists_documents_in_insertion_order() {
	let Some(dsn) = calldesk_testkit::env_dsn() else {
		eprintln!("CALLDESK_PG_DSN not set; skipping.");

		return;
	};
	let test_db = TestDatabase::new(&dsn).await.expect("Failed to create test database.");
	let db = connect(&test_db).await;
	let seed = fixtures::fixture_seed();
	let ids = docs::replace_documents(&db, &seed).await.expect("Failed to seed documents.");

	assert_eq!(ids.len(), seed.len());

	let listed = docs::list_documents(&db.pool).await.expect("Failed to list documents.");

	assert_eq!(listed.len(), seed.len());

	for (row, expected) in listed.iter().zip(seed.iter()) {
		assert_eq!(row.title, expected.title);
		assert_eq!(row.chunk_text, expected.chunk_text);
		assert_eq!(row.entity_tag, expected.entity_tag);
	}

	// Reseeding replaces, never appends.
	let ids = docs::replace_documents(&db, &seed[..2]).await.expect("Failed to reseed.");

	assert_eq!(ids.len(), 2);
	assert_eq!(docs::list_documents(&db.pool).await.expect("Failed to list.").len(), 2);

	test_db.cleanup().await.expect("Failed to clean up test database.");
}

#[tokio::test]
async fn records_and_replays_an_invocation() {
	let Some(dsn) = calldesk_testkit::env_dsn() else {
		eprintln!("CALLDESK_PG_DSN not set; skipping.");

		return;
	};
	let test_db = TestDatabase::new(&dsn).await.expect("Failed to create test database.");
	let db = connect(&test_db).await;
	let now = OffsetDateTime::now_utc();
	let call_id = audit::create_call(&db.pool, Some("dormero-coburg"), now)
		.await
		.expect("Failed to create call.");
	let call = audit::get_call(&db.pool, call_id).await.expect("Failed to fetch call.");

	assert_eq!(call.status, "open");
	assert_eq!(call.entity_tag.as_deref(), Some("dormero-coburg"));

	let snapshot = json!({
		"answer_draft": "Hier ist, was ich dazu in unseren Unterlagen gefunden habe.",
		"snippets": [],
		"confidence": 0.41,
	});

	audit::record_invocation(&db.pool, call_id, "parking coburg", &snapshot, 0.41, now)
		.await
		.expect("Failed to record invocation.");

	let invocations =
		audit::invocations_for_call(&db.pool, call_id).await.expect("Failed to list invocations.");

	assert_eq!(invocations.len(), 1);
	assert_eq!(invocations[0].query, "parking coburg");
	assert_eq!(invocations[0].results_json, snapshot);
	assert_eq!(invocations[0].confidence, 0.41);

	test_db.cleanup().await.expect("Failed to clean up test database.");
}
