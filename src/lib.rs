//! GTFS Feed Fetcher Library
//!
//! This library provides the core functionality for the `gtfsget` CLI.

pub mod commands;
pub mod core;
pub mod error;
pub mod utils;
