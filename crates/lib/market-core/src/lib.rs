//! Core types and upstream client for market-mcp.
//!
//! This crate owns the provider configuration, the company overview record
//! served by the upstream financial-data API, and the HTTP client that
//! fetches it.

pub mod client;
pub mod config;
pub mod overview;
