//! MCP tool modules.

pub mod market;
