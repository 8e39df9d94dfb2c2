use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Repository-assigned user identifier. `0` means "not assigned yet".
pub type UserId = u64;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier, issued by the repository on create
    pub id: UserId,
    /// User display name
    pub name: String,
    /// User email
    pub email: String,
}

impl User {
    /// Create an unassigned user. The repository sets the id on create.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.id != 0
    }
}

/// DTO for creating a new user
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
}
