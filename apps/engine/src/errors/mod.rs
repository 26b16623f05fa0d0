//! Error handling for the Love Letter engine.

pub mod domain;

pub use domain::{ActionViolation, DomainError};
