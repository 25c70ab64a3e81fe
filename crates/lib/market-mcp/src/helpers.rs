use std::borrow::Cow;

use market_core::client::LookupError;
use rmcp::ErrorData;
use rmcp::model::ErrorCode;

fn mcp_err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code,
        message: message.into(),
        data: None,
    }
}

/// Maps a lookup failure onto an MCP error, preserving the cause.
///
/// Transport and upstream-status failures surface as internal errors so the
/// caller can tell them apart by message; decode failures surface as parse
/// errors since they indicate upstream contract drift.
pub fn map_lookup_err(err: LookupError) -> ErrorData {
    match err {
        LookupError::Transport(cause) => mcp_err(
            ErrorCode::INTERNAL_ERROR,
            format!("upstream request failed: {cause}"),
        ),
        LookupError::UpstreamStatus { code } => mcp_err(
            ErrorCode::INTERNAL_ERROR,
            format!("unexpected status code: {code}"),
        ),
        LookupError::Decode(cause) => mcp_err(
            ErrorCode::PARSE_ERROR,
            format!("failed to decode overview response: {cause}"),
        ),
    }
}
