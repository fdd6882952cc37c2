//! Control signal returned by every step of a chain.

use crate::error::BoxError;

/// Outcome of running one step on one record.
///
/// - `Continue(value)` replaces the working record and moves on to the next step.
/// - `Omit` drops the record; the stream carries on with the next one.
/// - `Stop(None)` ends the stream cleanly. The current record is not emitted.
/// - `Stop(Some(err))` ends the stream and surfaces `err` to the caller once
///   everything produced before it has been read.
#[derive(Debug)]
pub enum Flow<T> {
    Continue(T),
    Omit,
    Stop(Option<BoxError>),
}

impl<T> Flow<T> {
    /// Clean end of stream.
    pub fn stop() -> Self {
        Flow::Stop(None)
    }

    /// End of stream with a failure.
    pub fn fail(err: impl Into<BoxError>) -> Self {
        Flow::Stop(Some(err.into()))
    }

    /// Whether the record goes on to the next step.
    pub fn is_continue(&self) -> bool {
        matches!(self, Flow::Continue(_))
    }

    /// Transform the carried value, leaving `Omit` and `Stop` untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Flow<U> {
        match self {
            Flow::Continue(value) => Flow::Continue(f(value)),
            Flow::Omit => Flow::Omit,
            Flow::Stop(reason) => Flow::Stop(reason),
        }
    }
}

impl<T, E> From<Result<T, E>> for Flow<T>
where
    E: Into<BoxError>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Flow::Continue(value),
            Err(err) => Flow::fail(err),
        }
    }
}
