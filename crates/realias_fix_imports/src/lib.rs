//! Relative-import rewriting for JavaScript/TypeScript projects.
//!
//! This crate rewrites deep relative imports (`../../components/...`) into
//! the fixed `@/` alias form (`@/components/...`) across every source file
//! under a root directory, overwriting a file in place only when its content
//! changed.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use realias_fix_imports::{Config, run_fix_imports};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config { root: std::path::PathBuf::from("src") };
//!
//! // Notices go through the writer as files are rewritten
//! let mut stdout = BufWriter::new(std::io::stdout());
//! let result = run_fix_imports(&cfg, &mut stdout)?;
//! stdout.flush()?;
//!
//! if !result.rewritten.is_empty() {
//!     println!("rewrote {} of {} files", result.rewritten.len(), result.files_scanned);
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod fixer;
mod reporter;
mod rules;
mod types;

// Re-export public API
pub use config::Config;
pub use fixer::run_fix_imports;
pub use rules::MODULE_CATEGORIES;
pub use types::FixResult;
