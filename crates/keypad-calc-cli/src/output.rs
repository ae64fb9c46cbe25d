//! Output formatting for display frames and the keypad

use console::Style;
use keypad_calc::format::{DisplayFrame, ERROR_TEXT};
use keypad_calc::keypad::{ButtonKind, Keypad, KeypadButton};
use serde::{Deserialize, Serialize};

use crate::error::CliResult;

/// Output format for frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON object per frame
    Json,
}

/// Inner width of a single keypad cell
const CELL_WIDTH: usize = 5;

/// Renders frames and the keypad for the terminal
#[derive(Debug, Clone, Copy)]
pub struct FrameRenderer {
    /// Output format
    pub format: OutputFormat,
    /// Whether to use colors
    pub use_color: bool,
    /// Right-align lines to this width (0 = no padding)
    pub width: usize,
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new(OutputFormat::Text, false)
    }
}

impl FrameRenderer {
    /// Create a new renderer
    #[must_use]
    pub const fn new(format: OutputFormat, use_color: bool) -> Self {
        Self {
            format,
            use_color,
            width: 0,
        }
    }

    /// Set the alignment width
    #[must_use]
    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders one frame.
    ///
    /// Text output prints the pending expression (if any) above the
    /// current operand; JSON output is a single line.
    pub fn render_frame(&self, frame: &DisplayFrame) -> CliResult<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(frame)?),
            OutputFormat::Text => {
                let current = self.paint(&self.align(&frame.current), self.current_style(frame));
                if frame.expression.is_empty() {
                    return Ok(current);
                }
                let expression = self.paint(&self.align(&frame.expression), Style::new().dim());
                Ok(format!("{expression}\n{current}"))
            }
        }
    }

    /// Renders the button grid
    pub fn render_keypad(&self, keypad: &Keypad) -> CliResult<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(keypad.buttons())?);
        }
        let (rows, _) = keypad.dimensions();
        let lines: Vec<String> = (0..rows)
            .map(|row| {
                keypad
                    .row(row)
                    .map(|button| self.render_button(button))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        Ok(lines.join("\n"))
    }

    fn render_button(&self, button: &KeypadButton) -> String {
        let inner = CELL_WIDTH * button.span + 3 * (button.span - 1);
        let cell = format!("[{:^inner$}]", button.label());
        let style = match button.kind {
            ButtonKind::Function => Style::new().cyan(),
            ButtonKind::Operator => Style::new().yellow().bold(),
            ButtonKind::Number => Style::new(),
        };
        self.paint(&cell, style)
    }

    fn current_style(&self, frame: &DisplayFrame) -> Style {
        if frame.current == ERROR_TEXT {
            Style::new().red().bold()
        } else {
            Style::new().bold()
        }
    }

    fn align(&self, text: &str) -> String {
        format!("{text:>width$}", width = self.width)
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.use_color {
            style.force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }
}
