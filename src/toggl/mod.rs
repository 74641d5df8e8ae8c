//! Toggl Track: REST client, resource models and service layer.

pub mod client;
pub mod models;
pub mod requests;
pub mod resolver;
pub mod services;

#[cfg(test)]
mod client_test;
#[cfg(test)]
pub(crate) mod fixtures;

pub use client::{TogglApi, TogglClient};
pub use resolver::WorkspaceResolver;
pub use services::TogglServices;
