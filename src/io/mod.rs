//! Color buffer output.
//!
//! Traversal results are per-vertex color buffers; this module serializes
//! them in the line-oriented `r, g, b` form consumed by downstream viewers,
//! one vertex per line, channels truncated to integers.
//!
//! # Example
//!
//! ```
//! use patina::color::Color;
//! use patina::io::write_colors;
//!
//! let colors = vec![Color::new(255.0, 0.0, 0.0), Color::BLACK];
//! let mut out = Vec::new();
//! write_colors(&colors, &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "255, 0, 0\n0, 0, 0\n");
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::color::Color;
use crate::error::Result;

/// Write one `r, g, b` line per color to the given writer.
///
/// Channels are truncated toward zero, so filter-weighted fractional values
/// serialize as integers.
pub fn write_colors<W: Write>(colors: &[Color], writer: &mut W) -> Result<()> {
    for c in colors {
        writeln!(writer, "{}, {}, {}", c.r as i64, c.g as i64, c.b as i64)?;
    }
    Ok(())
}

/// Write a color buffer to a file.
pub fn save_colors<P: AsRef<Path>>(colors: &[Color], path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_colors(colors, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a color buffer to standard output.
pub fn print_colors(colors: &[Color]) -> Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_colors(colors, &mut lock)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_format() {
        let colors = vec![
            Color::new(255.0, 128.0, 0.0),
            Color::BLACK,
            Color::new(12.7, 99.9, 1.0),
        ];

        let mut out = Vec::new();
        write_colors(&colors, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "255, 128, 0\n0, 0, 0\n12, 99, 1\n");
    }

    #[test]
    fn test_write_empty_buffer() {
        let mut out = Vec::new();
        write_colors(&[], &mut out).unwrap();
        assert!(out.is_empty());
    }
}
