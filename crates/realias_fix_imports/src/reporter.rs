use colored::Colorize;
use std::{
    io::{self, Write},
    path::Path,
};

/// One line per rewritten file: fixed notice text, then the path.
///
/// Writes to a caller-supplied handle; the CLI passes buffered stdout and
/// tests capture a byte buffer.
pub fn print_fixing_notice<W: Write>(writer: &mut W, path: &Path) -> io::Result<()> {
    writeln!(writer, "Fixing imports in {}", path.display().to_string().blue())
}
