//! Ordered steps applied to every record.
//!
//! A chain is a list of tagged closures folded left to right over each
//! record. Every step sees the output of the one before it; the first step
//! that does not return `Flow::Continue` ends the fold for that record.

mod awk;

pub use awk::AwkVars;
pub(crate) use awk::AwkFn;

use crate::flow::Flow;

type TransformFn<'a> = Box<dyn FnMut(Vec<u8>) -> Flow<Vec<u8>> + 'a>;
type FilterFn<'a> = Box<dyn FnMut(&[u8]) -> bool + 'a>;
type ObserveFn<'a> = Box<dyn FnMut(&mut [u8]) + 'a>;

pub(crate) enum Step<'a> {
    /// Rewrites the record, possibly signalling omit or stop.
    Transform(TransformFn<'a>),
    /// Keeps or omits the record untouched.
    Filter(FilterFn<'a>),
    /// Sees the working buffer in place; the record always continues.
    Observe(ObserveFn<'a>),
    /// Splits into fields and hands them to an awk-style callback.
    Awk(AwkFn<'a>),
}

impl<'a> Step<'a> {
    pub fn map(mut f: impl FnMut(Vec<u8>) -> Vec<u8> + 'a) -> Self {
        Step::Transform(Box::new(move |record| Flow::Continue(f(record))))
    }

    pub fn map_flow(f: impl FnMut(Vec<u8>) -> Flow<Vec<u8>> + 'a) -> Self {
        Step::Transform(Box::new(f))
    }

    pub fn map_text(mut f: impl FnMut(&str) -> String + 'a) -> Self {
        Self::map_text_flow(move |text| Flow::Continue(f(text)))
    }

    pub fn map_text_flow(mut f: impl FnMut(&str) -> Flow<String> + 'a) -> Self {
        Step::Transform(Box::new(move |record| match std::str::from_utf8(&record) {
            Ok(text) => f(text).map(String::into_bytes),
            Err(err) => Flow::fail(err),
        }))
    }

    pub fn grep(f: impl FnMut(&[u8]) -> bool + 'a) -> Self {
        Step::Filter(Box::new(f))
    }

    pub fn grep_text(mut f: impl FnMut(&str) -> bool + 'a) -> Self {
        Step::Transform(Box::new(move |record| {
            let keep = match std::str::from_utf8(&record) {
                Ok(text) => f(text),
                Err(err) => return Flow::fail(err),
            };
            if keep { Flow::Continue(record) } else { Flow::Omit }
        }))
    }

    pub fn each(f: impl FnMut(&mut [u8]) + 'a) -> Self {
        Step::Observe(Box::new(f))
    }

    pub fn each_text(mut f: impl FnMut(&str) + 'a) -> Self {
        Step::Transform(Box::new(move |record| {
            match std::str::from_utf8(&record) {
                Ok(text) => f(text),
                Err(err) => return Flow::fail(err),
            }
            Flow::Continue(record)
        }))
    }

    pub fn awk(f: impl FnMut(&str, &[&str], &AwkVars) -> Flow<String> + 'a) -> Self {
        Step::Awk(Box::new(f))
    }

    fn apply(&mut self, mut record: Vec<u8>, vars: &mut AwkVars) -> Flow<Vec<u8>> {
        match self {
            Step::Transform(f) => f(record),
            Step::Filter(f) => {
                if f(&record) {
                    Flow::Continue(record)
                } else {
                    Flow::Omit
                }
            }
            Step::Observe(f) => {
                f(&mut record);
                Flow::Continue(record)
            }
            Step::Awk(f) => awk::apply(f, record, vars),
        }
    }
}

#[derive(Default)]
pub(crate) struct Chain<'a> {
    steps: Vec<Step<'a>>,
}

impl<'a> Chain<'a> {
    pub fn push(&mut self, step: Step<'a>) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Run `record` through every step in registration order.
    pub fn run(&mut self, record: Vec<u8>, vars: &mut AwkVars) -> Flow<Vec<u8>> {
        let mut record = record;
        for step in &mut self.steps {
            record = match step.apply(record, vars) {
                Flow::Continue(next) => next,
                other => return other,
            };
        }
        Flow::Continue(record)
    }
}
