//! Validation Engine
//!
//! Clean separation of checker evaluation from derivation and CLI concerns.

pub mod engine;

pub use engine::{check, validate, ClueStatus, StatusSink, ValidationReport};
