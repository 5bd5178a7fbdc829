/// Module containing the news service client
pub mod news_service;

pub use crate::application::interfaces::news::NewsService;
pub use news_service::{NewsClient, fetch_news, set_default_news_client};
