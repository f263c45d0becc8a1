pub mod config;
pub mod error;
pub mod search;
pub mod search_query;
pub mod update_mobile;
