use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "fix-imports")]
#[command(about = "Rewrite deep relative imports to @/ alias form in JavaScript/TypeScript projects")]
pub struct Config {
    /// Root directory to rewrite. Used as given, so notices print paths
    /// joined onto it.
    #[arg(long, default_value = "src")]
    pub root: PathBuf,
}
