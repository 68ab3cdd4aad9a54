//! Domain layer containing the link entity and the store interface.
//!
//! This module has no dependencies on infrastructure or presentation layers.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions, implemented in
//!   `crate::infrastructure::persistence`

pub mod entities;
pub mod repositories;
