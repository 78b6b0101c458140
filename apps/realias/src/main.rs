use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use realias_fix_imports::Config;
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "realias")]
#[command(about = "Tools for normalizing module import paths in codebases", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rewrite deep relative imports to @/ alias form in JavaScript/TypeScript sources
    FixImports(Config),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::FixImports(cfg) => {
            info!("Running fix-imports under root: {}", cfg.root.display());

            let result = realias_fix_imports::run_fix_imports(&cfg, &mut stdout)?;
            debug!("Rewrote {} files", result.rewritten.len());

            let elapsed_ms = start.elapsed().as_millis();

            if result.rewritten.is_empty() {
                // Nothing changed, so the run stays silent on stdout
                info!(
                    "No imports needed rewriting ({} files scanned in {}ms)",
                    result.files_scanned, elapsed_ms
                );
            } else {
                writeln!(
                    stdout,
                    "\n{} Finished in {}ms: rewrote {} of {} source files.",
                    "●".bright_blue(),
                    elapsed_ms.to_string().cyan(),
                    result.rewritten.len().to_string().cyan(),
                    result.files_scanned.to_string().cyan()
                )?;
            }
            stdout.flush()?;

            Ok(())
        }
    }
}
