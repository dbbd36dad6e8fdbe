//! # Quill Core
//!
//! The domain layer of the Quill posts service.
//! This crate contains the post entity, its validation rules and the ports
//! that infrastructure must implement. It has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;
