pub mod config;
pub mod extract;
pub mod feed;
pub mod fetch;
