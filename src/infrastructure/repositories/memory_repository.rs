//! In-Memory User Repository
//!
//! Process-local implementation of the UserRepository trait, used as the
//! default store and in tests. Records are lost when the process exits.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{NewUser, StoreError, User, UserChanges, UserLookup, UserRepository};
use crate::infrastructure::metrics::time_store_operation;

const BACKEND: &str = "memory";

/// Concurrent in-memory user store.
///
/// Ids come from a monotonically increasing counter starting at 1 and are
/// never reused, even after deletes.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: DashMap<i64, User>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        time_store_operation("list_all", self.backend(), async move {
            let mut users: Vec<User> = self.users.iter().map(|entry| entry.value().clone()).collect();
            users.sort_by_key(|u| u.id);
            Ok(users)
        })
        .await
    }

    async fn find_by_id(&self, id: i64) -> Result<UserLookup, StoreError> {
        time_store_operation("find_by_id", self.backend(), async move {
            Ok(self.users.get(&id).map(|entry| entry.value().clone()).into())
        })
        .await
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        time_store_operation("create", self.backend(), async move {
            user.check_required()?;
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let user = user.into_user(id)?;
            self.users.insert(id, user.clone());
            Ok(user)
        })
        .await
    }

    async fn update(&self, id: i64, changes: UserChanges) -> Result<User, StoreError> {
        time_store_operation("update", self.backend(), async move {
            // The entry guard holds the shard lock for the whole merge.
            let mut entry = self.users.get_mut(&id).ok_or(StoreError::NotFound(id))?;
            changes.apply_to(entry.value_mut());
            Ok(entry.value().clone())
        })
        .await
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        time_store_operation("delete", self.backend(), async move {
            self.users
                .remove(&id)
                .map(|_| ())
                .ok_or(StoreError::NotFound(id))
        })
        .await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        BACKEND
    }
}
