//! # User API Library
//!
//! This crate provides a CRUD HTTP service for user records with:
//! - RESTful HTTP API endpoints (`/users`, `/users/{id}`)
//! - A pluggable user store (in-memory or PostgreSQL)
//! - Health probes and Prometheus metrics
//!
//! ## Architecture
//!
//! - **Domain Layer**: the `User` record and the `UserRepository` store trait
//! - **Application Layer**: the pass-through `UserService`
//! - **Infrastructure Layer**: store implementations, database pool, metrics
//! - **Presentation Layer**: HTTP handlers, routes and middleware
//!
//! ## Module Structure
//!
//! ```text
//! user_api/
//! +-- config/         Configuration management
//! +-- domain/         User entity and store trait
//! +-- application/    User service
//! +-- infrastructure/ Store implementations and metrics
//! +-- presentation/   HTTP routes, handlers and middleware
//! +-- shared/         Error translation
//! ```

// Configuration module
pub mod config;

// Domain layer - Core types
pub mod domain;

// Application layer - Services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
