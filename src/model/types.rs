use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status filter for flow run listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowRunStatus {
    /// No status filter
    Any = 0,
    /// Flow run still executing
    Running = 1,
    /// Flow run finished successfully
    Success = 2,
    /// Flow run failed
    Failed = 3,
    /// Flow run was stopped manually
    Stopped = 4,
}

impl FlowRunStatus {
    /// Numeric value sent as the `filter[status]` query parameter
    #[must_use]
    pub fn value(&self) -> i32 {
        *self as i32
    }

    /// Parses a status from its case-insensitive name
    #[must_use]
    pub fn try_from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "any" => Some(Self::Any),
            "running" => Some(Self::Running),
            "success" => Some(Self::Success),
            "failed" => Some(Self::Failed),
            "stopped" => Some(Self::Stopped),
            _ => None,
        }
    }
}

/// Entity kinds stored in a data pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolEntity {
    /// Generic data records
    Data = 1,
    /// Order records
    Order = 37,
}

impl PoolEntity {
    /// Human-readable title for this entity kind
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Data => "Data",
            Self::Order => "Order",
        }
    }
}

/// Pagination metadata from the `meta` object of a list envelope
///
/// Every field is optional; servers omit parts of the metadata and the
/// paging machinery falls back to safe defaults instead of failing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageMeta {
    /// 1-based index of the page served
    pub current_page: Option<u64>,
    /// Index of the final page of the result set
    pub last_page: Option<u64>,
    /// Total number of items across all pages
    pub total: Option<u64>,
}

impl PageMeta {
    /// Extracts pagination metadata from a decoded envelope
    #[must_use]
    pub fn from_envelope(envelope: &Value) -> Self {
        envelope
            .get("meta")
            .and_then(|meta| serde_json::from_value(meta.clone()).ok())
            .unwrap_or_default()
    }
}
