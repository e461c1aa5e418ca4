//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the scene core:
//! - Math types and colors
//! - Frame and wall-clock time
//! - Logging setup

pub mod math;
pub mod time;
pub mod logging;
