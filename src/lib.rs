//! Admin client for the portfolio CMS REST API.
//!
//! [`api::ApiClient`] sends authenticated requests, refreshing the access
//! token once per expiry episode no matter how many calls are waiting on it.
//! Typed CRUD for every portfolio resource is layered on top through
//! [`api::Resource`].

pub mod api;
pub mod auth;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod ui;

pub use api::{ApiClient, ApiRequest, ApiResponse};
pub use error::{ApiError, Result};
pub use models::{Session, UserIdentity};
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};
