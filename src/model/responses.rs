/// Payload returned by the news service
///
/// Its shape belongs to the news service and is passed through untouched.
/// Use `NewsClient::fetch_news_as` to decode it into a known type.
pub type NewsResponse = serde_json::Value;
