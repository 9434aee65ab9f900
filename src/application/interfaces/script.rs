use crate::error::AppError;
use crate::model::paging::PagedItems;
use async_trait::async_trait;
use serde_json::Value;

/// Operations on scripts and script versions
#[async_trait]
pub trait ScriptService: Send + Sync {
    /// Lists all scripts with their versions as a lazy paginated sequence
    fn get_scripts(&self) -> PagedItems;

    /// Fetches one script with its versions
    async fn get_script(&self, script_id: &str) -> Result<Value, AppError>;

    /// Patches script properties
    async fn update_script(&self, script_id: &str, props: Value) -> Result<Value, AppError>;

    /// Creates a new script
    async fn create_script(&self, props: Value) -> Result<Value, AppError>;

    /// Fetches one script version including its content
    async fn get_script_version(&self, script_version_id: &str) -> Result<Value, AppError>;

    /// Creates a new version of a script with the given source content
    async fn update_script_content(
        &self,
        script_id: &str,
        content: &str,
    ) -> Result<Value, AppError>;
}
