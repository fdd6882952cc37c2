//! Price report over a semicolon/comma separated listing.
//!
//! Run with: cargo run --example csv_report [FILE]
//! Without FILE a built-in sample is used.

use std::io::Cursor;
use std::sync::Arc;

use linewise::{FileInput, Flow, Reader};
use regex::Regex;

const SAMPLE: &str = "CSV Title
CSV description
ID,NAME,PRICE
A001,name one,12.3

A002,second row;7.1
A003,three row;15.51
Total: ....
Some text
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let reader = match std::env::args().nth(1) {
        Some(path) => Reader::from_provider(Arc::new(FileInput::new(path))),
        None => Reader::new(Cursor::new(SAMPLE)),
    };

    let mut sum = 0.0;
    let report = reader
        .grep_text(|line| line != "\n" && !line.is_empty())
        .grep(|line| !line.starts_with(b"CSV"))
        .set_field_separator(Regex::new("[,;]")?)
        .awk(|line, fields, vars| {
            if fields[0].starts_with("ID") {
                return Flow::Omit;
            }
            if fields[0].starts_with("Total:") {
                return Flow::stop();
            }
            if vars.nf < 3 {
                return Flow::fail(format!("csv parse failed for {line:?}"));
            }
            match fields[2].parse::<f64>() {
                Ok(price) => {
                    sum += price;
                    Flow::Continue(format!("line {}: {} costs {price:.2}", vars.nr, fields[1]))
                }
                Err(e) => Flow::fail(e),
            }
        })
        .read_all_string()?;

    print!("{report}");
    println!("Total: {sum:.2}");
    Ok(())
}
