//! Core utilities for realias tools.
//!
//! This crate provides shared functionality for tools that rewrite
//! JavaScript/TypeScript projects, including:
//! - Enumerating source files under a project root
//! - The suffix vocabulary that makes a file eligible

mod collector;
mod constants;

// Re-export public API
pub use collector::{collect_source_files, is_source_file};
pub use constants::SOURCE_SUFFIXES;
