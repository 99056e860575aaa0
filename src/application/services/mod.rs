//! Application Services
//!
//! Services that sit between the HTTP handlers and the domain store.
//!
//! ## Available Services
//!
//! - **UserService**: pass-through CRUD over the user store

pub mod user_service;

pub use user_service::{UserService, UserServiceImpl};

#[cfg(test)]
pub use user_service::MockUserService;
