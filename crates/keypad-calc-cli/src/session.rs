//! Rendering session: a calculator that echoes frames to a writer

use keypad_calc::prelude::*;
use std::io::Write;

use crate::error::CliResult;
use crate::output::FrameRenderer;

/// Calculator wired to an output stream
///
/// With echo on, every pressed label writes the resulting frame. The first
/// write failure stops echoing and is reported by [`Session::finish`].
#[derive(Debug)]
pub struct Session<W: Write> {
    calc: Calculator,
    renderer: FrameRenderer,
    out: W,
    echo: bool,
    error: Option<crate::error::CliError>,
}

impl<W: Write> Session<W> {
    /// Create a session writing to `out`
    pub fn new(formatter: Formatter, renderer: FrameRenderer, out: W) -> Self {
        Self {
            calc: Calculator::with_formatter(formatter),
            renderer,
            out,
            echo: false,
            error: None,
        }
    }

    /// Echo a frame after every pressed label
    #[must_use]
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Write the current frame
    pub fn write_frame(&mut self) -> CliResult<()> {
        let rendered = self.renderer.render_frame(&self.calc.frame())?;
        writeln!(self.out, "{rendered}")?;
        Ok(())
    }

    /// Flush output and hand back the writer, or the first deferred error
    pub fn finish(mut self) -> CliResult<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> CalculatorDriver for Session<W> {
    fn press(&mut self, label: &str) {
        self.calc.handle_input(label);
        if self.echo && self.error.is_none() {
            if let Err(err) = self.write_frame() {
                self.error = Some(err);
            }
        }
    }

    fn display(&self) -> String {
        self.calc.frame().current
    }

    fn expression(&self) -> String {
        self.calc.frame().expression
    }
}
