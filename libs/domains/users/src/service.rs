use std::sync::Arc;

use crate::error::UserResult;
use crate::models::{User, UserId};
use crate::repository::UserRepository;

/// Service layer for User use cases
///
/// A thin façade: identity comes from the repository and repository
/// errors are returned unchanged.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: UserId) -> UserResult<User> {
        self.repository.find_by_id(id).await
    }

    /// List every user
    pub async fn get_all_users(&self) -> UserResult<Vec<User>> {
        self.repository.find_all().await
    }

    /// Create a new user; the repository assigns the id
    pub async fn create_user(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> UserResult<User> {
        let user = User::new(name, email);
        self.repository.create(user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UserError;
    use crate::mock::MockUserRepository;
    use async_trait::async_trait;
    use mockall::predicate::eq;

    mockall::mock! {
        pub Repo {}

        #[async_trait]
        impl UserRepository for Repo {
            async fn find_by_id(&self, id: UserId) -> UserResult<User>;
            async fn find_all(&self) -> UserResult<Vec<User>>;
            async fn create(&self, user: User) -> UserResult<User>;
        }
    }

    #[tokio::test]
    async fn test_create_user() {
        let service = UserService::new(MockUserRepository::new());

        let user = service
            .create_user("João Silva", "joao@example.com")
            .await
            .unwrap();

        assert_eq!(user.name, "João Silva");
        assert_eq!(user.email, "joao@example.com");
        assert_ne!(user.id, 0, "id should be assigned by the repository");
    }

    #[tokio::test]
    async fn test_create_user_stores_in_repository() {
        let mut mock_repo = MockRepo::new();
        mock_repo
            .expect_create()
            .withf(|user| {
                user.id == 0 && user.name == "João Silva" && user.email == "joao@example.com"
            })
            .times(1)
            .returning(|mut user| {
                user.id = 1;
                Ok(user)
            });

        let service = UserService::new(mock_repo);
        let user = service
            .create_user("João Silva", "joao@example.com")
            .await
            .unwrap();

        assert_eq!(user.id, 1);
    }

    #[tokio::test]
    async fn test_create_user_repository_error() {
        let repo = MockUserRepository::new().with_error("database connection failed");
        let service = UserService::new(repo);

        let err = service
            .create_user("João Silva", "joao@example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::Repository(_)));
        assert_eq!(err.to_string(), "database connection failed");
    }

    #[tokio::test]
    async fn test_get_user() {
        let repo = MockUserRepository::new();
        repo.add_user(User {
            id: 1,
            name: "Maria Santos".to_string(),
            email: "maria@example.com".to_string(),
        })
        .await;
        let service = UserService::new(repo);

        let user = service.get_user(1).await.unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Maria Santos");
    }

    #[tokio::test]
    async fn test_get_user_passes_id_through() {
        let mut mock_repo = MockRepo::new();
        mock_repo
            .expect_find_by_id()
            .with(eq(7u64))
            .times(1)
            .returning(|id| Err(UserError::NotFound(id)));

        let service = UserService::new(mock_repo);
        let result = service.get_user(7).await;

        assert!(matches!(result, Err(UserError::NotFound(7))));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let service = UserService::new(MockUserRepository::new());

        let result = service.get_user(999).await;

        assert!(matches!(result, Err(UserError::NotFound(999))));
    }

    #[tokio::test]
    async fn test_get_all_users() {
        let repo = MockUserRepository::new();
        repo.add_user(User::new("João Silva", "joao@example.com"))
            .await;
        repo.add_user(User::new("Maria Santos", "maria@example.com"))
            .await;
        let service = UserService::new(repo);

        let users = service.get_all_users().await.unwrap();

        assert_eq!(users.len(), 2);
    }

    #[tokio::test]
    async fn test_get_all_users_empty() {
        let service = UserService::new(MockUserRepository::new());

        let users = service.get_all_users().await.unwrap();

        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_get_all_users_repository_error() {
        let repo = MockUserRepository::new().with_error("connection error");
        let service = UserService::new(repo);

        let result = service.get_all_users().await;

        assert!(matches!(result, Err(UserError::Repository(msg)) if msg == "connection error"));
    }

    #[tokio::test]
    async fn test_custom_find_by_id_behavior() {
        let repo = MockUserRepository::new().with_find_by_id_fn(|_| {
            Ok(User {
                id: 42,
                name: "Fixed User".to_string(),
                email: "fixed@example.com".to_string(),
            })
        });
        let service = UserService::new(repo);

        let user = service.get_user(999).await.unwrap();

        assert_eq!(user.id, 42);
        assert_eq!(user.name, "Fixed User");
    }
}
