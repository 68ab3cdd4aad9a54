//! Core domain entities.
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! [`Link`] is a stored record, [`NewLink`] is what the allocator hands to the
//! store.

pub mod link;

pub use link::{Link, NewLink};
