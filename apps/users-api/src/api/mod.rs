use axum::Router;
use domain_users::{UserRepository, UserService, handlers};

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by `axum_helpers::create_router`.
pub fn routes<R: UserRepository + 'static>(users: UserService<R>) -> Router {
    Router::new().nest("/users", handlers::router(users))
}
