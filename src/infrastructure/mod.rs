//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - User store implementations (in-memory, PostgreSQL)
//! - Database connection pooling
//! - Prometheus metrics

pub mod database;
pub mod metrics;
pub mod repositories;
