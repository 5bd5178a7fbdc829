/// News service interface
pub mod news;
