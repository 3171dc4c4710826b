//! Common utilities shared by the HTTP surface.
//!
//! This crate provides the transport error type and its conversion into
//! HTTP responses.

pub mod error;

pub use error::{AppError, AppResult, OptionExt};
