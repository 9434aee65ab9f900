use crate::error::AppError;
use crate::model::paging::PagedItems;
use crate::model::types::FlowRunStatus;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Operations on flow runs, run logs, payloads and scheduled flows
#[async_trait]
pub trait FlowService: Send + Sync {
    /// Requeues a finished flow run
    async fn retry_run(&self, id: &str) -> Result<Value, AppError>;

    /// Fetches one flow run
    async fn get_flow_run(&self, id: &str) -> Result<Value, AppError>;

    /// Lists flow runs started after the given instant
    ///
    /// `status` of [`FlowRunStatus::Any`] disables the status filter;
    /// `search` adds a free-text filter when present.
    fn get_flow_runs(
        &self,
        after: DateTime<Utc>,
        sort_by: &str,
        status: FlowRunStatus,
        search: Option<&str>,
    ) -> PagedItems;

    /// Lists the step logs of one flow run
    fn get_flow_run_logs(&self, flow_id: &str, sort_by: &str) -> PagedItems;

    /// Lists payload metadata records for one step of one flow run
    fn get_payload_metadata(&self, flow_run_id: &str, flow_step_id: &str) -> PagedItems;

    /// Downloads one payload body; `None` when the payload is gone
    async fn get_payload(&self, payload_id: u64) -> Result<Option<String>, AppError>;

    /// Lists scheduled flows, optionally filtered by status, with a
    /// per-call page ceiling
    fn get_scheduled_flows(&self, status: Option<&str>, max_pages: u32) -> PagedItems;

    /// Deletes a scheduled flow
    async fn delete_scheduled_flow(&self, id: &str) -> Result<Value, AppError>;

    /// Fetches the step tree of one flow version
    async fn get_flow_steps(&self, flow_version_id: u64) -> Result<Value, AppError>;
}
