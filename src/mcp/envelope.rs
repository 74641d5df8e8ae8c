//! Uniform tool result envelope.
//!
//! Tool methods never surface a service failure as a protocol error. Every
//! outcome becomes JSON text content; failures are `{"error": "..."}` with
//! `is_error` set. `McpError` is reserved for responses that cannot be
//! serialized at all.

use std::fmt::Display;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

use crate::error::ServiceError;
use crate::http::ApiError;

pub const NOTHING_RUNNING: &str = "No time entry currently running";

/// Every way a tool call can fail.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("{0}")]
    Transport(#[from] ApiError),

    #[error("{0}")]
    Precondition(String),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    InvalidArgument(String),
}

impl From<ServiceError> for ToolError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Precondition(msg) => ToolError::Precondition(msg),
            ServiceError::InvalidArgument(msg) => ToolError::InvalidArgument(msg),
            ServiceError::Api(e) => ToolError::Transport(e),
        }
    }
}

pub type ToolOutcome<T> = Result<T, ToolError>;

/// Turn an absent record into `NotFound` with the given message.
pub fn found<T>(value: Option<T>, message: &'static str) -> ToolOutcome<T> {
    value.ok_or(ToolError::NotFound(message))
}

/// `{"items": [...], "total": n}`
pub fn listing<T: Serialize>(items: Vec<T>) -> Value {
    let total = items.len();
    json!({ "items": items, "total": total })
}

/// `{"success": bool, "message": "..."}`
pub fn deleted(success: bool, what: &str, id: impl Display) -> Value {
    let message = if success {
        format!("{what} {id} deleted successfully")
    } else {
        format!("Failed to delete {} {id}", what.to_lowercase())
    };
    json!({ "success": success, "message": message })
}

fn to_text<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(
            "serialization_error",
            Some(serde_json::json!({"error": e.to_string()})),
        )
    })
}

/// Render an outcome, logging failures under the tool's name.
pub fn render<T: Serialize>(
    tool: &str,
    outcome: ToolOutcome<T>,
) -> Result<CallToolResult, McpError> {
    match outcome {
        Ok(value) => Ok(CallToolResult::success(vec![Content::text(to_text(
            &value,
        )?)])),
        Err(err) => {
            match &err {
                ToolError::NotFound(_) => {
                    tracing::debug!(tool, error = %err, "tool call found nothing")
                }
                ToolError::Transport(_)
                | ToolError::Precondition(_)
                | ToolError::InvalidArgument(_) => {
                    tracing::warn!(tool, error = %err, "tool call failed")
                }
            }
            let body = json!({ "error": err.to_string() });
            Ok(CallToolResult::error(vec![Content::text(to_text(&body)?)]))
        }
    }
}
