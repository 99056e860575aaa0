//! User Service
//!
//! Thin layer between the HTTP handlers and the user store. Each operation
//! makes exactly one store call and hands back its result or failure as is.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{NewUser, StoreError, User, UserChanges, UserLookup, UserRepository};

/// User service trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// List every user
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    /// Get user by ID
    async fn get_user_by_id(&self, id: i64) -> Result<UserLookup, StoreError>;

    /// Create a user
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;

    /// Update a user
    async fn update_user(&self, id: i64, changes: UserChanges) -> Result<User, StoreError>;

    /// Delete a user
    async fn delete_user(&self, id: i64) -> Result<(), StoreError>;

    /// Check the underlying store
    async fn check_store(&self) -> Result<(), StoreError>;

    /// Backend label of the underlying store
    fn store_backend(&self) -> &'static str;
}

/// UserService implementation
pub struct UserServiceImpl<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
}

impl<R> UserServiceImpl<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> UserService for UserServiceImpl<R>
where
    R: UserRepository + 'static,
{
    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        tracing::debug!("Listing users");
        self.user_repo.list_all().await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<UserLookup, StoreError> {
        tracing::debug!(user_id = id, "Fetching user");
        self.user_repo.find_by_id(id).await
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        tracing::debug!("Creating user");
        self.user_repo.create(user).await
    }

    async fn update_user(&self, id: i64, changes: UserChanges) -> Result<User, StoreError> {
        tracing::debug!(user_id = id, "Updating user");
        self.user_repo.update(id, changes).await
    }

    async fn delete_user(&self, id: i64) -> Result<(), StoreError> {
        tracing::debug!(user_id = id, "Deleting user");
        self.user_repo.delete(id).await
    }

    async fn check_store(&self) -> Result<(), StoreError> {
        self.user_repo.ping().await
    }

    fn store_backend(&self) -> &'static str {
        self.user_repo.backend()
    }
}
