//! # Domain Layer
//!
//! Core types of the user API, independent of HTTP and of any storage engine.
//!
//! ## Structure
//!
//! - **entities**: the `User` record, its create/update payloads, the lookup
//!   outcome and the `UserRepository` store trait

pub mod entities;

pub use entities::*;
