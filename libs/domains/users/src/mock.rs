//! Configurable test double for [`UserRepository`].
//!
//! Each operation resolves in this order:
//! 1. a custom function installed with `with_*_fn`
//! 2. the error configured with [`MockUserRepository::with_error`]
//! 3. plain in-memory behavior

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use crate::error::{UserError, UserResult};
use crate::models::{User, UserId};
use crate::repository::UserRepository;

type FindByIdFn = Box<dyn Fn(UserId) -> UserResult<User> + Send + Sync>;
type FindAllFn = Box<dyn Fn() -> UserResult<Vec<User>> + Send + Sync>;
type CreateFn = Box<dyn Fn(User) -> UserResult<User> + Send + Sync>;

#[derive(Debug)]
struct MockState {
    users: HashMap<UserId, User>,
    next_id: UserId,
}

impl MockState {
    fn new() -> Self {
        Self {
            users: HashMap::new(),
            next_id: 1,
        }
    }

    fn insert(&mut self, mut user: User) -> User {
        if !user.is_assigned() {
            user.id = self.next_id;
            self.next_id += 1;
        }
        self.users.insert(user.id, user.clone());
        user
    }
}

/// Mock repository with scriptable failures and overrides
pub struct MockUserRepository {
    state: Mutex<MockState>,
    error_message: Option<String>,
    find_by_id_fn: Option<FindByIdFn>,
    find_all_fn: Option<FindAllFn>,
    create_fn: Option<CreateFn>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState::new()),
            error_message: None,
            find_by_id_fn: None,
            find_all_fn: None,
            create_fn: None,
        }
    }

    /// Make every operation fail with `UserError::Repository(message)`
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn without_error(mut self) -> Self {
        self.error_message = None;
        self
    }

    pub fn with_find_by_id_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(UserId) -> UserResult<User> + Send + Sync + 'static,
    {
        self.find_by_id_fn = Some(Box::new(f));
        self
    }

    pub fn with_find_all_fn<F>(mut self, f: F) -> Self
    where
        F: Fn() -> UserResult<Vec<User>> + Send + Sync + 'static,
    {
        self.find_all_fn = Some(Box::new(f));
        self
    }

    pub fn with_create_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(User) -> UserResult<User> + Send + Sync + 'static,
    {
        self.create_fn = Some(Box::new(f));
        self
    }

    /// Seed a user. Users with `id == 0` get the next free id.
    pub async fn add_user(&self, user: User) -> User {
        self.state.lock().await.insert(user)
    }

    /// Drop all stored users and configured behavior
    pub async fn reset(&mut self) {
        *self.state.lock().await = MockState::new();
        self.error_message = None;
        self.find_by_id_fn = None;
        self.find_all_fn = None;
        self.create_fn = None;
    }

    pub async fn user_count(&self) -> usize {
        self.state.lock().await.users.len()
    }

    pub async fn get_user(&self, id: UserId) -> Option<User> {
        self.state.lock().await.users.get(&id).cloned()
    }

    fn configured_error(&self) -> Option<UserError> {
        self.error_message
            .as_ref()
            .map(|msg| UserError::Repository(msg.clone()))
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: UserId) -> UserResult<User> {
        if let Some(f) = &self.find_by_id_fn {
            return f(id);
        }
        if let Some(err) = self.configured_error() {
            return Err(err);
        }
        self.get_user(id).await.ok_or(UserError::NotFound(id))
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        if let Some(f) = &self.find_all_fn {
            return f();
        }
        if let Some(err) = self.configured_error() {
            return Err(err);
        }
        Ok(self.state.lock().await.users.values().cloned().collect())
    }

    async fn create(&self, mut user: User) -> UserResult<User> {
        if let Some(f) = &self.create_fn {
            return f(user);
        }
        if let Some(err) = self.configured_error() {
            return Err(err);
        }
        user.id = 0;
        Ok(self.state.lock().await.insert(user))
    }
}
