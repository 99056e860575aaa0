//! # Domain Entities
//!
//! The user record and the store contract that persists it.
//!
//! The repository trait lives here and is implemented in the infrastructure
//! layer, following the dependency inversion principle.

mod user;

pub use user::{
    NewUser, StoreError, User, UserChanges, UserLookup, UserRepository, USER_NOT_FOUND_MESSAGE,
};

#[cfg(test)]
pub use user::MockUserRepository;
