//! Test utilities for Wayfarer concierge tests.
//!
//! This module provides mock implementations and test helpers.
#![allow(dead_code)]

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockBehavior, MockDriver};
