//! Repository Implementations
//!
//! Concrete implementations of the `UserRepository` store trait defined in
//! the domain layer.
//!
//! ## Available Repositories
//!
//! - **InMemoryUserRepository** - process-local store backed by `DashMap`
//! - **PgUserRepository** - PostgreSQL store backed by `sqlx`
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_api::application::services::UserServiceImpl;
//! use user_api::infrastructure::repositories::InMemoryUserRepository;
//!
//! let service = UserServiceImpl::new(Arc::new(InMemoryUserRepository::new()));
//! ```

pub mod memory_repository;
pub mod user_repository;

pub use memory_repository::InMemoryUserRepository;
pub use user_repository::PgUserRepository;
