//! Core module - Shared data structures and utilities
//!
//! This module provides:
//! - Error taxonomy (RewriteError)
//! - Logging setup
//! - Report model (FileReport, RunReport)
//! - Rendering functions for different output formats
//! - Path normalization utilities
//! - Content hashing

pub mod error;
pub mod logging;
pub mod model;
pub mod paths;
pub mod render;
pub mod util;
