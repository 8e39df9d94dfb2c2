//! Users API
//!
//! Composition root for the users service.
//!
//! ## Architecture
//!
//! ```text
//! HTTP client
//!   ↓
//! axum_helpers::create_router (/api, docs, tracing, timeout)
//!   ↓
//! domain_users::handlers
//!   ↓
//! UserService
//!   ↓
//! InMemoryUserRepository
//! ```
//!
//! ## Modules
//!
//! - `config`: Environment-driven configuration
//! - `api`: Route composition
//! - `openapi`: Combined API documentation
//! - `demo`: Scripted use-case walkthrough

pub mod api;
pub mod config;
pub mod demo;
pub mod openapi;

use axum::Router;
use axum_helpers::server::{create_router, health_router};
use domain_users::{InMemoryUserRepository, UserRepository, UserService};

pub use config::Config;

/// Wire repository → service → router once, at process start.
pub fn build_app(config: &Config) -> Router {
    let repository = InMemoryUserRepository::new();
    let service = UserService::new(repository);
    build_app_with(config, service)
}

/// Same as [`build_app`] but with a caller-provided service.
pub fn build_app_with<R: UserRepository + 'static>(
    config: &Config,
    service: UserService<R>,
) -> Router {
    let api_routes = api::routes(service);

    create_router::<openapi::ApiDoc>(api_routes, &config.server).merge(health_router(config.app))
}
