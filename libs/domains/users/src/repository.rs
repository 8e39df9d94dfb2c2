use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{User, UserId};

/// Repository trait for User persistence
///
/// The repository is the only authority for user identity: callers never
/// choose an id, and an issued id is never reused.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get a user by ID
    async fn find_by_id(&self, id: UserId) -> UserResult<User>;

    /// Snapshot of all users, in no particular order
    async fn find_all(&self) -> UserResult<Vec<User>>;

    /// Store a user under a freshly issued ID and return the stored copy.
    /// Any id already set on `user` is overwritten.
    async fn create(&self, user: User) -> UserResult<User>;
}

#[derive(Debug)]
struct UserStore {
    users: HashMap<UserId, User>,
    next_id: UserId,
}

impl Default for UserStore {
    fn default() -> Self {
        Self {
            users: HashMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory implementation of UserRepository
///
/// Clones share the same underlying store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<UserStore>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.store.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> UserResult<User> {
        let store = self.store.read().await;
        store.users.get(&id).cloned().ok_or(UserError::NotFound(id))
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().cloned().collect())
    }

    async fn create(&self, mut user: User) -> UserResult<User> {
        // Assign, insert and increment under one write guard.
        let mut store = self.store.write().await;
        user.id = store.next_id;
        store.users.insert(user.id, user.clone());
        store.next_id += 1;
        Ok(user)
    }
}
