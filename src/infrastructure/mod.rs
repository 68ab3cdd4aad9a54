//! Infrastructure layer for external integrations.
//!
//! Implements the store interface defined by the domain layer.
//!
//! - [`persistence`] - PostgreSQL and in-process repository implementations

pub mod persistence;
