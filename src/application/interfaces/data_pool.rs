use crate::error::AppError;
use crate::model::paging::PagedItems;
use async_trait::async_trait;
use serde_json::Value;

/// Operations on data pools and their deduplicated content
#[async_trait]
pub trait DataPoolService: Send + Sync {
    /// Lists all data pools as a lazy paginated sequence
    fn get_data_pools(&self) -> PagedItems;

    /// Fetches one data pool
    async fn get_data_pool(&self, id: u64) -> Result<Value, AppError>;

    /// Patches data pool properties
    async fn update_data_pool(&self, id: u64, props: Value) -> Result<Value, AppError>;

    /// Creates a new data pool
    async fn create_data_pool(&self, props: Value) -> Result<Value, AppError>;

    /// Deletes a data pool
    async fn delete_data_pool(&self, id: u64) -> Result<Value, AppError>;

    /// Streams the deduplicated records held in a pool
    fn get_data_pool_content(&self, id: u64) -> PagedItems;
}
