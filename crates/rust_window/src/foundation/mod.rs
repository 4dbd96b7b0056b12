//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - 2D math types for sizes and cursor coordinates
//! - Logging utilities

pub mod math;
pub mod logging;
