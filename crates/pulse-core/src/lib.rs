//! # Pulse Core
//!
//! The domain layer of the Pulse backend.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the user/post entities, the port traits infrastructure must implement, and
//! the locate/mutate/save services that operate on the embedded post
//! collections.

pub mod domain;
pub mod error;
pub mod ports;
pub mod project;
pub mod service;

pub use error::DomainError;
