//! Application Layer
//!
//! Services that connect the presentation layer to the domain store.

pub mod services;
