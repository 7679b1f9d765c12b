use std::io::{self, Write};

use crate::{Escaper, LiteralOptions};

/// Adapts an [`io::Write`] so that raw bytes written to it come out the
/// other side as a wrapped Lua string literal.
///
/// The prefix is emitted on the first write, and the closing quote only by
/// [`EscapedLiteralWriter::finish`]. Dropping the writer without calling
/// `finish` leaves the literal unterminated.
///
/// Once a write to the inner writer fails, the wrapping state no longer
/// matches what was emitted, so every later `write` and `finish` fails too.
pub struct EscapedLiteralWriter<W: Write> {
    inner: W,
    options: LiteralOptions,
    escaper: Option<Escaper>,
    buffer: String,
    poisoned: bool,
}

impl<W: Write> EscapedLiteralWriter<W> {
    pub fn new(inner: W) -> Self {
        Self::with_options(inner, LiteralOptions::default())
    }

    pub fn with_options(inner: W, options: LiteralOptions) -> Self {
        Self {
            inner,
            options,
            escaper: None,
            buffer: String::new(),
            poisoned: false,
        }
    }

    /// Number of output lines emitted so far. Zero before the first write.
    pub fn lines(&self) -> usize {
        match self.escaper {
            Some(ref escaper) => escaper.lines(),
            None => 0,
        }
    }

    fn check_poisoned(&self) -> io::Result<()> {
        if self.poisoned {
            return Err(io::Error::other("literal writer failed on an earlier write"));
        }
        Ok(())
    }

    /// Sends the escaped buffer to the inner writer, poisoning on failure.
    fn emit_buffer(&mut self) -> io::Result<()> {
        if let Err(e) = self.inner.write_all(self.buffer.as_bytes()) {
            self.poisoned = true;
            return Err(e);
        }
        Ok(())
    }

    /// Terminates the literal and hands back the inner writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.check_poisoned()?;
        self.buffer.clear();
        let escaper = match self.escaper.take() {
            Some(escaper) => escaper,
            None => Escaper::begin(&self.options, &mut self.buffer),
        };
        escaper.end(&mut self.buffer);
        self.emit_buffer()?;
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl<W: Write> Write for EscapedLiteralWriter<W> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, io::Error> {
        self.check_poisoned()?;
        self.buffer.clear();
        if self.escaper.is_none() {
            self.escaper = Some(Escaper::begin(&self.options, &mut self.buffer));
        }
        if let Some(ref mut escaper) = self.escaper {
            escaper.push_all(&mut self.buffer, buf);
        }
        self.emit_buffer()?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), io::Error> {
        self.inner.flush()
    }
}
