//! Error types for the Wayfarer library.
//!
//! This crate provides the foundation error types used throughout the Wayfarer
//! ecosystem.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use wayfarer_error::{WayfarerResult, HttpError};
//!
//! fn fetch_data() -> WayfarerResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gemini;
mod http;
mod json;

pub use config::ConfigError;
pub use error::{WayfarerError, WayfarerErrorKind, WayfarerResult};
pub use gemini::{GeminiError, GeminiErrorKind, GeminiResult};
pub use http::HttpError;
pub use json::JsonError;
