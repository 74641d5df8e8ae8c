//! Service-layer error type shared by both vendors.

use miette::Diagnostic;
use thiserror::Error;

use crate::http::ApiError;

#[derive(Error, Diagnostic, Debug)]
pub enum ServiceError {
    /// A default (e.g. the workspace) could not be resolved.
    #[error("{0}")]
    #[diagnostic(
        code(app_vitals_mcp::service::precondition),
        help("Set TOGGL_WORKSPACE_ID or pass a workspace explicitly.")
    )]
    Precondition(String),

    /// A caller-supplied value failed local validation.
    #[error("{0}")]
    #[diagnostic(code(app_vitals_mcp::service::invalid_argument))]
    InvalidArgument(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Api(#[from] ApiError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
