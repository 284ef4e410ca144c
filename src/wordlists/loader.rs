//! Word list loading utilities
//!
//! Reads plain-text word lists (one word per line) for pool imports.

use std::fs;
use std::io;
use std::path::Path;

/// Read the non-blank lines of a word list file
///
/// Lines starting with `#` are comments. Words are returned untouched so
/// the importer can report the invalid ones.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use verbo::wordlists::loader::load_lines;
///
/// let words = load_lines("data/verbs.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lines(&content))
}

fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
