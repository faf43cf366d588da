//! CLI command implementations.

pub mod info;
pub mod normalize;
pub mod trace;

use anyhow::{Context, Result};
use std::io::Read;

/// Resolve a command input: `-` reads stdin, `@path` reads a file,
/// anything else is taken literally.
pub fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }

    if let Some(path) = input.strip_prefix('@') {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {path}"));
    }

    Ok(input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_input() {
        assert_eq!(read_input("5-й этаж").unwrap(), "5-й этаж");
    }

    #[test]
    fn test_file_input() {
        let path = std::env::temp_dir().join(format!("numnorm-input-{}.txt", std::process::id()));
        std::fs::write(&path, "$1").unwrap();

        let text = read_input(&format!("@{}", path.display())).unwrap();
        assert_eq!(text, "$1");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let err = read_input("@/definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("failed to read input file"));
    }
}
