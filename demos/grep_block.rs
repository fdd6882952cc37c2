//! Print every `pub struct` block of a Rust file, without line comments.
//!
//! Run with: cargo run --example grep_block [FILE]
//! FILE defaults to src/reader.rs.

use std::sync::Arc;

use linewise::{FileInput, Reader};
use regex::bytes::Regex;

/// Keeps the lines from a `begin` match through the next `end` match.
struct Block {
    begin: Regex,
    end: Regex,
    inside: bool,
}

impl Block {
    fn keep(&mut self, line: &[u8]) -> bool {
        if !self.inside && self.begin.is_match(line) {
            self.inside = true;
        }
        if self.inside {
            if self.end.is_match(line) {
                self.inside = false;
            }
            return true;
        }
        false
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "src/reader.rs".to_string());

    let mut block = Block {
        begin: Regex::new(r"^pub struct ")?,
        end: Regex::new(r"^\}\s*$")?,
        inside: false,
    };
    let comment = Regex::new(r"\s*//.*")?;

    let mut out = std::io::stdout().lock();
    let mut reader = Reader::from_provider(Arc::new(FileInput::new(path)))
        .grep(|line| block.keep(line))
        .map(|line| comment.replace_all(&line, &b""[..]).into_owned());

    std::io::copy(&mut reader, &mut out)?;
    Ok(())
}
