//! Utility functions for code generation and URL validation.
//!
//! - [`code_generator`] - Short code generation and reserved-word checks
//! - [`url_validator`] - Long URL validation

pub mod code_generator;
pub mod url_validator;
