pub mod auth;
pub mod client;
pub mod request;
pub mod resources;
pub mod response;
pub mod validate;

pub use client::{ApiClient, ApiClientBuilder, DEFAULT_BASE_URL, REFRESH_TOKEN_PATH};
pub use request::ApiRequest;
pub use resources::{Resource, Resources};
pub use response::ApiResponse;
pub use validate::Validate;
