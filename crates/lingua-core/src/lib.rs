//! Lingua Core — shared domain abstractions.
//!
//! This crate defines the error taxonomy and value types that all bounded
//! contexts depend on. It contains no infrastructure code.

pub mod clock;
pub mod course;
pub mod error;
