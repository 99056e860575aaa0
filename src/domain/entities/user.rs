//! User entity and repository trait.
//!
//! The repository is the user store: the collaborator that assigns ids,
//! persists records and owns any validation of their contents.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Message carried by every "user does not exist" outcome.
pub const USER_NOT_FOUND_MESSAGE: &str = "Usuário não encontrado.";

/// A stored user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier, immutable after creation
    pub id: i64,

    pub name: String,

    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Fields for a user that does not exist yet, as received.
///
/// `name` and `email` are required, but a body missing them still reaches the
/// store, which rejects it with [`StoreError::MissingField`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: Option<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            phone,
        }
    }

    /// Fail on the first required field that is absent.
    pub fn check_required(&self) -> Result<(), StoreError> {
        if self.name.is_none() {
            return Err(StoreError::MissingField("name"));
        }
        if self.email.is_none() {
            return Err(StoreError::MissingField("email"));
        }
        Ok(())
    }

    /// Attach a store-assigned id.
    pub fn into_user(self, id: i64) -> Result<User, StoreError> {
        match (self.name, self.email) {
            (Some(name), Some(email)) => Ok(User {
                id,
                name,
                email,
                phone: self.phone,
            }),
            (None, _) => Err(StoreError::MissingField("name")),
            (Some(_), None) => Err(StoreError::MissingField("email")),
        }
    }
}

/// Partial replacement of a user's fields. Absent fields are left untouched.
///
/// An explicit `null` counts as absent, so a stored phone can be replaced but
/// never cleared through an update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl UserChanges {
    /// Merge the present fields into `user`.
    pub fn apply_to(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(phone) = self.phone {
            user.phone = Some(phone);
        }
    }
}

/// Outcome of a single-user lookup.
///
/// Absence is a normal result, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLookup {
    Found(User),
    NotFound,
}

impl From<Option<User>> for UserLookup {
    fn from(user: Option<User>) -> Self {
        match user {
            Some(user) => Self::Found(user),
            None => Self::NotFound,
        }
    }
}

/// Failure raised by a user store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Update or delete addressed a user that does not exist
    #[error("{}", USER_NOT_FOUND_MESSAGE)]
    NotFound(i64),

    /// Create body without a required field
    #[error("Campo obrigatório ausente: {0}")]
    MissingField(&'static str),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Any other store failure, message preserved verbatim
    #[error("{0}")]
    Failure(String),
}

impl StoreError {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }
}

/// Data access contract for users.
///
/// Implemented in the infrastructure layer; the service layer only sees this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users, ordered by id.
    async fn list_all(&self) -> Result<Vec<User>, StoreError>;

    /// Find a user by id.
    async fn find_by_id(&self, id: i64) -> Result<UserLookup, StoreError>;

    /// Persist a new user and return it with its assigned id.
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    /// Merge `changes` into the user with `id` and return the result.
    async fn update(&self, id: i64, changes: UserChanges) -> Result<User, StoreError>;

    /// Remove the user with `id`.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;

    /// Check that the store can serve requests.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Short backend label, reported by the readiness probe and on store metrics.
    fn backend(&self) -> &'static str;
}
