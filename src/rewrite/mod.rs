//! Rewrite module - The file rewriting pipeline
//!
//! Provides:
//! - rules: Literal and regex rewrite rules, and the built-in rule set
//! - transform: Ordered application of a rule set to text
//! - discover: Recursive candidate discovery by extension
//! - runner: FileRewriter, tying discovery, transform and writes together

pub mod discover;
pub mod rules;
pub mod runner;
pub mod transform;
