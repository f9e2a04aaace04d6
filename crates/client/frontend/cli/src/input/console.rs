use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, Sender};

use client_frontend_core::MessageEntry;
use runtime::{InputProvider, Prompt, RuntimeError};

/// Prompted line reader that also prints queued messages.
///
/// Messages sent through the paired [`Sender`] are printed before the next
/// prompt, so output produced while a session is running never interleaves
/// with a half-written prompt.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    messages: Receiver<MessageEntry>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> (Self, Sender<MessageEntry>) {
        let (tx, rx) = mpsc::channel();
        (
            Self {
                reader,
                writer,
                messages: rx,
            },
            tx,
        )
    }

    /// Prints `prompt> ` and reads one line. Returns `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.flush_messages()?;
        write!(self.writer, "{prompt}> ")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn print(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }

    /// Prints every queued message.
    pub fn flush_messages(&mut self) -> io::Result<()> {
        while let Ok(message) = self.messages.try_recv() {
            writeln!(self.writer, "{}", message.text)?;
        }
        self.writer.flush()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> InputProvider for Console<R, W> {
    fn next_input(&mut self, prompt: &Prompt) -> runtime::Result<Option<String>> {
        self.read_line(&prompt.to_string())
            .map_err(RuntimeError::Input)
    }
}
