/// Default number of items requested per page for collection endpoints
pub const DEFAULT_ITEMS_PER_PAGE: u32 = 250;
/// Default hard ceiling on the number of pages fetched by one item sequence
pub const DEFAULT_MAX_PAGES: u32 = 50;
/// Default TCP connect timeout in seconds for API requests
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default transfer timeout in seconds for a single API request
pub const DEFAULT_TRANSFER_TIMEOUT_SECS: u64 = 10;
/// Default inactivity (read) timeout in seconds for API requests
pub const DEFAULT_INACTIVITY_TIMEOUT_SECS: u64 = 10;
/// Envelope key under which list endpoints return their items
pub const DATA_KEY: &str = "data";
/// Base URL for the Patchworks core API
pub const CORE_BASE_URL: &str = "https://core.wearepatchworks.com/api/v1";
/// Base URL for the Patchworks fabric API, which also hosts the login service
pub const FABRIC_BASE_URL: &str = "https://svc-fabric.wearepatchworks.com/api/v1";
/// Path of the login endpoint, resolved against the fabric base URL
pub const LOGIN_PATH: &str = "login";
/// Default maximum number of requests allowed per rate limit period
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 60;
/// Default rate limit period in seconds
pub const DEFAULT_RATE_LIMIT_PERIOD_SECONDS: u64 = 60;
/// Default burst size for the rate limiter
pub const DEFAULT_RATE_LIMIT_BURST_SIZE: u32 = 10;
/// User agent string used in HTTP requests to identify this client to the Patchworks API
pub const USER_AGENT: &str = "pw-client/0.1.0";
