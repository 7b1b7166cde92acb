use serde_json::Value;
use sqlx::PgExecutor;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
	Error, Result,
	models::{CallRecord, ToolInvocation},
};

/// Opens a call/audit session. The boundary calls this when the caller did
/// not supply a pre-existing call id.
pub async fn create_call<'e, E>(
	executor: E,
	entity_tag: Option<&str>,
	started_at: OffsetDateTime,
) -> Result<Uuid>
where
	E: PgExecutor<'e>,
{
	let call_id = Uuid::new_v4();

	sqlx::query(
		"\
INSERT INTO calls (call_id, started_at, entity_tag, status)
VALUES ($1,$2,$3,'open')",
	)
	.bind(call_id)
	.bind(started_at)
	.bind(entity_tag)
	.execute(executor)
	.await?;

	Ok(call_id)
}

pub async fn get_call<'e, E>(executor: E, call_id: Uuid) -> Result<CallRecord>
where
	E: PgExecutor<'e>,
{
	sqlx::query_as::<_, CallRecord>(
		"SELECT call_id, started_at, entity_tag, status FROM calls WHERE call_id = $1",
	)
	.bind(call_id)
	.fetch_optional(executor)
	.await?
	.ok_or_else(|| Error::NotFound(format!("call {call_id}")))
}

/// Snapshots one retrieval invocation verbatim. Persisted exactly once per
/// orchestrator call by the external caller; the engine itself never writes.
pub async fn record_invocation<'e, E>(
	executor: E,
	call_id: Uuid,
	query: &str,
	results_json: &Value,
	confidence: f32,
	ts: OffsetDateTime,
) -> Result<Uuid>
where
	E: PgExecutor<'e>,
{
	let invocation_id = Uuid::new_v4();

	sqlx::query(
		"\
INSERT INTO tool_invocations (invocation_id, call_id, query, results_json, confidence, ts)
VALUES ($1,$2,$3,$4,$5,$6)",
	)
	.bind(invocation_id)
	.bind(call_id)
	.bind(query)
	.bind(results_json)
	.bind(confidence)
	.bind(ts)
	.execute(executor)
	.await?;

	Ok(invocation_id)
}

pub async fn invocations_for_call<'e, E>(executor: E, call_id: Uuid) -> Result<Vec<ToolInvocation>>
where
	E: PgExecutor<'e>,
{
	let invocations = sqlx::query_as::<_, ToolInvocation>(
		"\
SELECT invocation_id, call_id, query, results_json, confidence, ts
FROM tool_invocations
WHERE call_id = $1
ORDER BY ts",
	)
	.bind(call_id)
	.fetch_all(executor)
	.await?;

	Ok(invocations)
}
