//! Seams between the picker engine and its host.

use crate::error::FeedbackResult;

/// Receives every committed value.
///
/// The engine calls this at most once per committed transition and never
/// with the value that was already committed. Closures work directly:
///
/// ```rust
/// use dialpick::picker::ValueSink;
///
/// let mut seen = Vec::new();
/// let mut sink = |value: i64| seen.push(value);
/// sink.on_change(71);
/// assert_eq!(seen, vec![71]);
/// ```
pub trait ValueSink {
    fn on_change(&mut self, value: i64);
}

impl<F> ValueSink for F
where
    F: FnMut(i64),
{
    fn on_change(&mut self, value: i64) {
        self(value)
    }
}

/// An audio device able to play a short tick.
pub trait Chime {
    /// Acquire the device. Called lazily, at most once per engine.
    fn open(&mut self) -> FeedbackResult<()>;

    /// Play one tick on an opened device.
    fn ring(&mut self) -> FeedbackResult<()>;
}
