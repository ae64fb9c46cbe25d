//! Calculator session: owns the state record and dispatches button labels

use tracing::{debug, trace};

use crate::core::{CalculatorState, Input};
use crate::format::{DisplayFrame, Formatter};

/// Callback invoked with the new frame after every state change
pub type FrameListener = Box<dyn FnMut(&DisplayFrame)>;

/// Event-driven calculator
///
/// Holds the single [`CalculatorState`] and re-renders it through a
/// [`Formatter`] after each event.
pub struct Calculator {
    state: CalculatorState,
    formatter: Formatter,
    listeners: Vec<FrameListener>,
}

impl std::fmt::Debug for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
            .field("state", &self.state)
            .field("formatter", &self.formatter)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator in the initial state with en-US formatting
    #[must_use]
    pub fn new() -> Self {
        Self::with_formatter(Formatter::new())
    }

    /// Creates a calculator with a custom formatter
    #[must_use]
    pub fn with_formatter(formatter: Formatter) -> Self {
        Self {
            state: CalculatorState::new(),
            formatter,
            listeners: Vec::new(),
        }
    }

    /// Handles one raw button label.
    ///
    /// Unknown labels are ignored and leave the state untouched.
    pub fn handle_input(&mut self, label: &str) -> DisplayFrame {
        match Input::from_label(label) {
            Ok(input) => self.apply(input),
            Err(err) => {
                debug!(%err, "ignoring button label");
                self.frame()
            }
        }
    }

    /// Applies one input event and returns the new frame
    pub fn apply(&mut self, input: Input) -> DisplayFrame {
        let next = self.state.clone().apply(input);
        trace!(label = %input.label(), from = ?self.state, to = ?next, "transition");

        if next == self.state {
            return self.frame();
        }
        self.state = next;

        let frame = self.frame();
        for listener in &mut self.listeners {
            listener(&frame);
        }
        frame
    }

    /// Renders the current state
    #[must_use]
    pub fn frame(&self) -> DisplayFrame {
        self.formatter.frame(&self.state)
    }

    /// Registers a change listener
    pub fn subscribe(&mut self, listener: impl FnMut(&DisplayFrame) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Returns the state record
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the formatter
    #[must_use]
    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Same as pressing `AC`
    pub fn reset(&mut self) -> DisplayFrame {
        self.apply(Input::Clear)
    }
}
