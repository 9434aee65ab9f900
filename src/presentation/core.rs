/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

//! Typed client for the Patchworks core API
//!
//! Thin methods over the request executor: each supplies a path, query and
//! body, and interprets the returned payload shape. Collection endpoints
//! return a [`PagedItems`] sequence; nothing is fetched until it is polled.

use crate::application::config::RequestOptions;
use crate::application::interfaces::{DataPoolService, FlowService, ScriptService};
use crate::error::AppError;
use crate::model::http::ApiClient;
use crate::model::paging::PagedItems;
use crate::model::types::FlowRunStatus;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Method, StatusCode};
use serde_json::Value;

use crate::constants::DATA_KEY;

/// Client for the core API family
pub struct CoreClient {
    api: ApiClient,
}

impl CoreClient {
    pub(crate) fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// The underlying request executor, for untyped access
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Derives a client with merged option overrides; the original keeps its own
    pub fn with_options(&self, options: RequestOptions) -> Result<Self, AppError> {
        Ok(Self::new(self.api.with_options(options)?))
    }
}

#[async_trait]
impl ScriptService for CoreClient {
    fn get_scripts(&self) -> PagedItems {
        self.api.items(
            "scripts",
            vec![("include".to_string(), "versions,latestVersion".to_string())],
        )
    }

    async fn get_script(&self, script_id: &str) -> Result<Value, AppError> {
        self.api
            .query(
                &format!("scripts/{script_id}"),
                StatusCode::OK,
                Method::GET,
                Some(&[("include", "versions,latestVersion".to_string())]),
                None,
                Some(DATA_KEY),
            )
            .await
    }

    async fn update_script(&self, script_id: &str, props: Value) -> Result<Value, AppError> {
        self.api
            .query(
                &format!("scripts/{script_id}"),
                StatusCode::OK,
                Method::PATCH,
                None,
                Some(&props),
                Some(DATA_KEY),
            )
            .await
    }

    async fn create_script(&self, props: Value) -> Result<Value, AppError> {
        self.api
            .query(
                "scripts",
                StatusCode::CREATED,
                Method::POST,
                None,
                Some(&props),
                Some(DATA_KEY),
            )
            .await
    }

    async fn get_script_version(&self, script_version_id: &str) -> Result<Value, AppError> {
        self.api
            .query(
                &format!("script-versions/{script_version_id}"),
                StatusCode::OK,
                Method::GET,
                Some(&[("include", "content".to_string())]),
                None,
                Some(DATA_KEY),
            )
            .await
    }

    async fn update_script_content(
        &self,
        script_id: &str,
        content: &str,
    ) -> Result<Value, AppError> {
        self.api
            .query(
                &format!("scripts/{script_id}/script-versions"),
                StatusCode::CREATED,
                Method::POST,
                None,
                Some(&serde_json::json!({"content": content})),
                Some(DATA_KEY),
            )
            .await
    }
}

#[async_trait]
impl DataPoolService for CoreClient {
    fn get_data_pools(&self) -> PagedItems {
        self.api.items("data-pool", Vec::new())
    }

    async fn get_data_pool(&self, id: u64) -> Result<Value, AppError> {
        self.api
            .query(
                &format!("data-pool/{id}"),
                StatusCode::OK,
                Method::GET,
                None,
                None,
                Some(DATA_KEY),
            )
            .await
    }

    async fn update_data_pool(&self, id: u64, props: Value) -> Result<Value, AppError> {
        self.api
            .query(
                &format!("data-pool/{id}"),
                StatusCode::OK,
                Method::PATCH,
                None,
                Some(&props),
                Some(DATA_KEY),
            )
            .await
    }

    async fn create_data_pool(&self, props: Value) -> Result<Value, AppError> {
        self.api
            .query(
                "data-pool",
                StatusCode::CREATED,
                Method::POST,
                None,
                Some(&props),
                Some(DATA_KEY),
            )
            .await
    }

    async fn delete_data_pool(&self, id: u64) -> Result<Value, AppError> {
        self.api
            .query(
                &format!("data-pool/{id}"),
                StatusCode::OK,
                Method::DELETE,
                None,
                None,
                Some(DATA_KEY),
            )
            .await
    }

    fn get_data_pool_content(&self, id: u64) -> PagedItems {
        self.api
            .items(&format!("data-pool/{id}/deduped-data"), Vec::new())
    }
}

#[async_trait]
impl FlowService for CoreClient {
    async fn retry_run(&self, id: &str) -> Result<Value, AppError> {
        self.api
            .query(
                &format!("flow-runs/{id}/retry"),
                StatusCode::OK,
                Method::POST,
                None,
                None,
                Some(DATA_KEY),
            )
            .await
    }

    async fn get_flow_run(&self, id: &str) -> Result<Value, AppError> {
        self.api
            .query(
                &format!("flow-runs/{id}"),
                StatusCode::OK,
                Method::GET,
                None,
                None,
                Some(DATA_KEY),
            )
            .await
    }

    fn get_flow_runs(
        &self,
        after: DateTime<Utc>,
        sort_by: &str,
        status: FlowRunStatus,
        search: Option<&str>,
    ) -> PagedItems {
        let mut query = vec![
            ("include".to_string(), "flow,flowVersion".to_string()),
            ("fields[flow]".to_string(), "id,name".to_string()),
            ("sort".to_string(), sort_by.to_string()),
            (
                "filter[started_after]".to_string(),
                after.timestamp_millis().to_string(),
            ),
        ];

        if status != FlowRunStatus::Any {
            query.push(("filter[status]".to_string(), status.value().to_string()));
        }

        if let Some(search) = search {
            query.push(("filter[search]".to_string(), search.to_string()));
        }

        self.api.items("flow-runs", query)
    }

    fn get_flow_run_logs(&self, flow_id: &str, sort_by: &str) -> PagedItems {
        let query = vec![
            ("include".to_string(), "flowRunLogMetadata".to_string()),
            ("fields[flowStep]".to_string(), "id,name".to_string()),
            ("sort".to_string(), sort_by.to_string()),
            ("load_payload_ids".to_string(), "true".to_string()),
        ];

        self.api
            .items(&format!("flow-runs/{flow_id}/flow-run-logs"), query)
    }

    fn get_payload_metadata(&self, flow_run_id: &str, flow_step_id: &str) -> PagedItems {
        let query = vec![
            ("filter[flow_run_id]".to_string(), flow_run_id.to_string()),
            ("filter[flow_step_id]".to_string(), flow_step_id.to_string()),
        ];

        self.api.items("payload-metadata", query)
    }

    async fn get_payload(&self, payload_id: u64) -> Result<Option<String>, AppError> {
        // Download bodies are not envelope-wrapped; take the decoded value as-is.
        let result = self
            .api
            .query(
                &format!("payload-metadata/{payload_id}/download"),
                StatusCode::OK,
                Method::GET,
                None,
                None,
                None,
            )
            .await?;

        Ok(result.get(0).and_then(Value::as_str).map(String::from))
    }

    fn get_scheduled_flows(&self, status: Option<&str>, max_pages: u32) -> PagedItems {
        let mut query = vec![("include".to_string(), "flow,flowVersion".to_string())];

        if let Some(status) = status {
            query.push(("filter[status]".to_string(), status.to_string()));
        }

        let options = self.api.options().clone().with_max_pages(Some(max_pages));
        self.api
            .items_with_options("scheduled-flows", query, options)
    }

    async fn delete_scheduled_flow(&self, id: &str) -> Result<Value, AppError> {
        self.api
            .query(
                &format!("scheduled-flows/{id}"),
                StatusCode::OK,
                Method::DELETE,
                None,
                None,
                Some(DATA_KEY),
            )
            .await
    }

    async fn get_flow_steps(&self, flow_version_id: u64) -> Result<Value, AppError> {
        let query = [
            ("to_tree", "true".to_string()),
            (
                "include",
                "endpoint.system.logo,connector,filters,parentFlowStep,routes,variables,\
                 scriptVersion.script,flowVersion,cache,flow,notificationGroup"
                    .to_string(),
            ),
            ("load_notes_count", "false".to_string()),
        ];

        self.api
            .query(
                &format!("flow-versions/{flow_version_id}/steps"),
                StatusCode::OK,
                Method::GET,
                Some(&query),
                None,
                Some(DATA_KEY),
            )
            .await
    }
}
