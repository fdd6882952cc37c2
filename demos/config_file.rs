//! Reader configured from JSON.
//!
//! Run with: cargo run --example config_file --features json

use std::io::Cursor;

use linewise::{Flow, Reader, ReaderConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ReaderConfig::from_json_str(
        r##"{
            "record_separator": "#",
            "field_separator": "[,;]",
            "buffer_limit": 64
        }"##,
    )?;

    let input = "1,name one,12.3#2,second row;7.1#3,three row;15.51";
    let records = Reader::with_config(Cursor::new(input), &config)?
        .awk(|_, fields, vars| {
            Flow::Continue(format!("{}: {} field(s), first {:?}", vars.nr, vars.nf, fields[0]))
        })
        .read_all_strings()?;

    for record in records {
        println!("{}", record.trim_end_matches('#'));
    }
    Ok(())
}
