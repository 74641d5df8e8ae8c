//! Vendor transport error types.
//!
//! Every failure talking to a vendor REST API ends up here: non-2xx
//! statuses, network failures and bodies that do not match the resource
//! model. These are never retried or translated by the clients.

use miette::Diagnostic;
use thiserror::Error;

use super::Vendor;

/// Errors raised by the vendor HTTP clients.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("{vendor} API error ({status}): {body}")]
    #[diagnostic(code(app_vitals_mcp::http::status))]
    Http {
        vendor: Vendor,
        status: u16,
        body: String,
    },

    #[error("Failed to reach {vendor} API: {source}")]
    #[diagnostic(
        code(app_vitals_mcp::http::network),
        help("Check network connectivity and the configured API URL.")
    )]
    Network {
        vendor: Vendor,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid response from {vendor} API: {message}")]
    #[diagnostic(
        code(app_vitals_mcp::http::invalid_response),
        help("The vendor returned data in an unexpected format.")
    )]
    InvalidResponse { vendor: Vendor, message: String },

    #[error("Failed to build {vendor} HTTP client: {message}")]
    #[diagnostic(code(app_vitals_mcp::http::client_build))]
    ClientBuild { vendor: Vendor, message: String },
}

impl ApiError {
    /// HTTP status of a vendor rejection, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for vendor client operations.
pub type ApiResult<T> = Result<T, ApiError>;
