//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use mockall::mock;

use user_api::config::Settings;
use user_api::domain::{NewUser, StoreError, User, UserChanges, UserLookup, UserRepository};
use user_api::infrastructure::repositories::InMemoryUserRepository;
use user_api::startup::{build_router, AppState};

mock! {
    pub Store {}

    #[async_trait]
    impl UserRepository for Store {
        async fn list_all(&self) -> Result<Vec<User>, StoreError>;
        async fn find_by_id(&self, id: i64) -> Result<UserLookup, StoreError>;
        async fn create(&self, user: NewUser) -> Result<User, StoreError>;
        async fn update(&self, id: i64, changes: UserChanges) -> Result<User, StoreError>;
        async fn delete(&self, id: i64) -> Result<(), StoreError>;
        async fn ping(&self) -> Result<(), StoreError>;
        fn backend(&self) -> &'static str;
    }
}

/// Test application backed by a real store
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<InMemoryUserRepository>,
}

impl TestApp {
    /// Router wired to a fresh in-memory store
    pub fn new() -> Self {
        let store = Arc::new(InMemoryUserRepository::new());
        let server = server_for(store.clone());
        Self { server, store }
    }
}

/// Build a test server over any store implementation
pub fn server_for<R>(store: Arc<R>) -> TestServer
where
    R: UserRepository + 'static,
{
    let settings = Settings::defaults().expect("default settings");
    let router = build_router(AppState::with_repository(store, settings));
    TestServer::new(router).expect("Failed to start test server")
}

/// Test server over a mocked store
pub fn server_with_mock(store: MockStore) -> TestServer {
    server_for(Arc::new(store))
}

/// Random user payload
pub fn fake_new_user() -> NewUser {
    NewUser::new(
        Name().fake::<String>(),
        SafeEmail().fake::<String>(),
        Some(PhoneNumber().fake()),
    )
}

pub fn user(id: i64, name: &str, email: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        phone: None,
    }
}
