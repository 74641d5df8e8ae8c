//! Trello: REST client, resource models and board/card services.

pub mod client;
pub mod models;
pub mod requests;
pub mod services;

#[cfg(test)]
pub(crate) mod fixtures;

pub use client::{TrelloApi, TrelloClient};
pub use services::TrelloServices;
