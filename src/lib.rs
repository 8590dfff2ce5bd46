//! Question Aura client
//!
//! Typed REST client, session handling, and view models for the Question Aura
//! Q&A service.

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod models;
pub mod pages;
pub mod slug;
pub mod upload;

pub use api::ApiClient;
pub use config::Config;
pub use errors::{ClientError, ClientResult};
