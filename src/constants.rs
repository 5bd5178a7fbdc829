/// Default base address of the GrowGuru API
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
/// Default address of the news service endpoint
pub const DEFAULT_NEWS_URL: &str = "http://localhost:5000/noticias";
/// Key under which the login flow persists the bearer token
pub const TOKEN_KEY: &str = "token";
/// Default location of the persisted key-value store
pub const DEFAULT_STORAGE_PATH: &str = ".growguru/local_storage.json";
/// Default request timeout in seconds for both the API and the news service
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent string sent with every request
pub const USER_AGENT: &str = "growguru-client/0.1.0";
/// Placeholder printed instead of a credential
pub const REDACTED: &str = "***";
