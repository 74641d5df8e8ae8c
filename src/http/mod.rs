//! Shared HTTP plumbing for the vendor clients.
//!
//! Both clients build their `reqwest::Client` here and funnel every response
//! through the same handlers, so the 2xx / non-2xx / soft-failure rules are
//! identical across vendors.

mod error;


use std::fmt;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

pub use error::{ApiError, ApiResult};

/// The vendor a client talks to. Used in error messages and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vendor {
    Toggl,
    Trello,
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vendor::Toggl => f.write_str("Toggl"),
            Vendor::Trello => f.write_str("Trello"),
        }
    }
}

/// Build the connection pool owned by one vendor client.
pub fn build_client(vendor: Vendor) -> ApiResult<Client> {
    // reqwest is built without a bundled crypto provider
    let _ = rustls::crypto::ring::default_provider().install_default();

    Client::builder()
        .user_agent(concat!("app-vitals-mcp/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ApiError::ClientBuild {
            vendor,
            message: e.to_string(),
        })
}

/// Send a request, mapping connection failures to `ApiError::Network`.
pub async fn send(vendor: Vendor, request: RequestBuilder) -> ApiResult<Response> {
    request
        .send()
        .await
        .map_err(|source| ApiError::Network { vendor, source })
}

/// Handle a response with standardized error handling.
///
/// Returns the deserialized body on success, or `ApiError::Http` carrying the
/// status code and raw body on any non-success status.
pub async fn handle_response<T: DeserializeOwned>(
    vendor: Vendor,
    response: Response,
) -> ApiResult<T> {
    let response = error_for_status(vendor, response).await?;
    let body = read_body(vendor, response).await?;
    parse_body(vendor, &body)
}

/// Like [`handle_response`], but a 404 is an absent resource rather than an error.
pub async fn handle_optional<T: DeserializeOwned>(
    vendor: Vendor,
    response: Response,
) -> ApiResult<Option<T>> {
    if response.status() == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    handle_response(vendor, response).await.map(Some)
}

/// Like [`handle_response`], but an empty or `null` body is an absent resource.
pub async fn handle_maybe_empty<T: DeserializeOwned>(
    vendor: Vendor,
    response: Response,
) -> ApiResult<Option<T>> {
    let response = error_for_status(vendor, response).await?;
    let body = read_body(vendor, response).await?;
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(None);
    }
    parse_body(vendor, trimmed).map(Some)
}

/// Deletion outcome derived from the status code alone; the body is ignored.
pub async fn handle_deleted(vendor: Vendor, response: Response) -> ApiResult<bool> {
    let response = error_for_status(vendor, response).await?;
    Ok(matches!(
        response.status(),
        StatusCode::OK | StatusCode::NO_CONTENT
    ))
}

async fn error_for_status(vendor: Vendor, response: Response) -> ApiResult<Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    tracing::debug!(%vendor, status, "vendor request rejected");
    Err(ApiError::Http {
        vendor,
        status,
        body,
    })
}

async fn read_body(vendor: Vendor, response: Response) -> ApiResult<String> {
    response
        .text()
        .await
        .map_err(|source| ApiError::Network { vendor, source })
}

fn parse_body<T: DeserializeOwned>(vendor: Vendor, body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| ApiError::InvalidResponse {
        vendor,
        message: e.to_string(),
    })
}
