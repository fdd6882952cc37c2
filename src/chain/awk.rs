//! AWK-style step: strip the separator, split into fields, call back, re-terminate.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{DEFAULT_FIELD_SEPARATOR, DEFAULT_RECORD_SEPARATOR};
use crate::flow::Flow;

pub(crate) type AwkFn<'a> = Box<dyn FnMut(&str, &[&str], &AwkVars) -> Flow<String> + 'a>;

static DEFAULT_FS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DEFAULT_FIELD_SEPARATOR).expect("default field separator is a valid pattern")
});

/// Per-reader context, in the spirit of awk's built-in variables.
#[derive(Debug, Clone)]
pub struct AwkVars {
    /// Number of the current record, starting at 1.
    pub nr: u64,
    /// Field count of the most recently split record.
    pub nf: usize,
    /// Record separator.
    pub rs: u8,
    /// Field separator.
    pub fs: Regex,
}

impl Default for AwkVars {
    fn default() -> Self {
        Self {
            nr: 0,
            nf: 0,
            rs: DEFAULT_RECORD_SEPARATOR,
            fs: DEFAULT_FS.clone(),
        }
    }
}

pub(crate) fn apply(f: &mut AwkFn<'_>, record: Vec<u8>, vars: &mut AwkVars) -> Flow<Vec<u8>> {
    let rs = vars.rs;
    let terminated = record.last() == Some(&rs);
    let body = if terminated {
        &record[..record.len() - 1]
    } else {
        &record[..]
    };
    let line = match std::str::from_utf8(body) {
        Ok(line) => line,
        Err(err) => return Flow::fail(err),
    };

    let fields: Vec<&str> = vars.fs.split(line).collect();
    vars.nf = fields.len();

    f(line, &fields, vars).map(|out| {
        let mut out = out.into_bytes();
        if terminated && out.last() != Some(&rs) {
            out.push(rs);
        }
        out
    })
}
