//! Warning and error lines on standard error

use std::fmt::Display;
use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

const PROGRAM: &str = "koala";

/// Writes `koala: <severity>: <message>` lines, coloring the severity.
pub struct Diagnostics<W: WriteColor = StandardStream> {
    out: W,
}

impl Diagnostics<StandardStream> {
    /// Diagnostics on standard error.
    pub fn new(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::with_writer(StandardStream::stderr(choice))
    }
}

impl<W: WriteColor> Diagnostics<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn warning(&mut self, message: impl Display) {
        // Nowhere left to report a failing stderr
        let _ = self.emit("warning", Color::Yellow, &message);
    }

    pub fn error(&mut self, message: impl Display) {
        let _ = self.emit("error", Color::Red, &message);
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, severity: &str, color: Color, message: &dyn Display) -> io::Result<()> {
        write!(self.out, "{}: ", PROGRAM)?;
        self.out
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(self.out, "{}", severity)?;
        self.out.reset()?;
        writeln!(self.out, ": {}", message)?;
        self.out.flush()
    }
}
