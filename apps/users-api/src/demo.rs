//! Scripted walk through the user use cases, run with `users-api demo`.

use domain_users::{User, UserRepository, UserService};
use eyre::WrapErr;
use tracing::info;

/// Creates two users, fetches the first and lists everyone.
///
/// Returns the listed users so callers can inspect the outcome.
pub async fn run<R: UserRepository>(service: &UserService<R>) -> eyre::Result<Vec<User>> {
    info!("Demonstrating the user service");

    let first = service
        .create_user("João Silva", "joao@example.com")
        .await
        .wrap_err("failed to create user 1")?;
    info!(?first, "User created");

    let second = service
        .create_user("Maria Santos", "maria@example.com")
        .await
        .wrap_err("failed to create user 2")?;
    info!(?second, "User created");

    let found = service
        .get_user(first.id)
        .await
        .wrap_err("failed to fetch user")?;
    info!(?found, "User found");

    let users = service
        .get_all_users()
        .await
        .wrap_err("failed to list users")?;
    info!(count = users.len(), "All users");
    for user in &users {
        info!(?user, "  -");
    }

    info!("Demonstration finished");
    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_users::{InMemoryUserRepository, MockUserRepository};

    #[tokio::test]
    async fn test_demo_creates_two_users() {
        let service = UserService::new(InMemoryUserRepository::new());

        let mut users = run(&service).await.unwrap();
        users.sort_by_key(|u| u.id);

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].name, "João Silva");
        assert_eq!(users[1].id, 2);
        assert_eq!(users[1].email, "maria@example.com");
    }

    #[tokio::test]
    async fn test_demo_reports_repository_failure() {
        let service = UserService::new(MockUserRepository::new().with_error("storage offline"));

        let err = run(&service).await.unwrap_err();

        assert!(err.to_string().contains("failed to create user 1"));
        assert_eq!(err.root_cause().to_string(), "storage offline");
    }
}
