//! HTTP middleware module.
//!
//! ```ignore
//! use axum_helpers::http::{security_headers, timeout_error_body};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(timeout_error_body))
//!     .layer(axum::middleware::from_fn(security_headers));
//! ```

pub mod security;
pub mod timeout;

pub use security::security_headers;
pub use timeout::timeout_error_body;
