/// Authentication flow and the authenticated send path
pub mod auth;
/// Account credentials with the shared bearer token slot
pub mod credentials;
