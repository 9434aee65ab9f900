/// Client builder wiring credentials, rate gate and options into API clients
pub mod client;
/// Application configuration module
pub mod config;
/// Service traits for the typed endpoint surface
pub mod interfaces;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
