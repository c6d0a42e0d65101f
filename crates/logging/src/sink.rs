//! crates/logging/src/sink.rs
//! Streams collected diagnostic events to a writer.

use std::borrow::Borrow;
use std::io::{self, Write};

use crate::thread_local::{DiagnosticEvent, drain_events};

/// Streaming sink that renders [`DiagnosticEvent`] values into an [`io::Write`] target.
///
/// Each event is written on its own line as `<prefix>: [category] message`.
///
/// # Examples
///
/// ```
/// use logging::{DiagnosticEvent, DiagnosticSink, InfoFlag};
///
/// let mut sink = DiagnosticSink::new(Vec::new(), "shastep");
/// sink.write(&DiagnosticEvent::Info {
///     flag: InfoFlag::Digest,
///     level: 1,
///     message: "digest ready".to_string(),
/// })?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output, "shastep: [digest] digest ready\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct DiagnosticSink<W> {
    writer: W,
    prefix: &'static str,
}

impl<W> DiagnosticSink<W> {
    /// Creates a sink that labels every line with `prefix`.
    #[must_use]
    pub const fn new(writer: W, prefix: &'static str) -> Self {
        Self { writer, prefix }
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> DiagnosticSink<W>
where
    W: Write,
{
    /// Writes a single event to the underlying writer.
    pub fn write(&mut self, event: &DiagnosticEvent) -> io::Result<()> {
        writeln!(self.writer, "{}: {event}", self.prefix)
    }

    /// Writes each event from the iterator to the underlying writer.
    pub fn write_all<I, E>(&mut self, events: I) -> io::Result<()>
    where
        I: IntoIterator<Item = E>,
        E: Borrow<DiagnosticEvent>,
    {
        for event in events {
            self.write(event.borrow())?;
        }
        Ok(())
    }

    /// Drains the current thread's event buffer into the writer.
    ///
    /// Returns the number of events written.
    pub fn flush_events(&mut self) -> io::Result<usize> {
        let events = drain_events();
        let count = events.len();
        self.write_all(events)?;
        self.writer.flush()?;
        Ok(count)
    }
}
