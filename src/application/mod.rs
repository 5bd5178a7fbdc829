/// Configured API client with bearer token injection
pub mod client;
/// Application configuration module
pub mod config;
/// Request interceptors run before dispatch
pub mod interceptor;
/// Service interfaces
pub mod interfaces;
/// Service implementations
pub mod services;
