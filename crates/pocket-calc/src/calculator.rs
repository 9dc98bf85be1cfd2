//! Calculator controller
//!
//! Owns the [`CalcState`] and the display sink. Each click runs one pure
//! transition, stores the new state and pushes the display text (if any) to
//! the sink.

use crate::core::{CalcState, Digit, Input, Operator, INITIAL_OPERAND};

/// Where the calculator writes the text to show
///
/// The controller only ever writes; it never reads the display back.
pub trait DisplaySink {
    /// Replaces the shown text
    fn set_text(&mut self, text: &str);
}

/// Keeps the last text shown
impl DisplaySink for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Keeps every text shown, oldest first
impl DisplaySink for Vec<String> {
    fn set_text(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

impl<D: DisplaySink + ?Sized> DisplaySink for &mut D {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text);
    }
}

/// Click-driven calculator bound to a display
#[derive(Debug)]
pub struct Calculator<D: DisplaySink> {
    state: CalcState,
    display: D,
}

impl Default for Calculator<String> {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl<D: DisplaySink> Calculator<D> {
    /// Creates a cleared calculator and shows `0`
    pub fn new(mut display: D) -> Self {
        display.set_text(INITIAL_OPERAND);
        Self {
            state: CalcState::default(),
            display,
        }
    }

    /// A digit key was clicked
    pub fn on_digit(&mut self, digit: Digit) {
        self.apply(Input::Digit(digit));
    }

    /// The decimal point key was clicked
    pub fn on_decimal(&mut self) {
        self.apply(Input::Decimal);
    }

    /// An operator key was clicked
    pub fn on_operator(&mut self, op: Operator) {
        self.apply(Input::Operator(op));
    }

    /// The clear key was clicked
    pub fn on_clear(&mut self) {
        self.apply(Input::Clear);
    }

    /// Runs one input through the state machine
    pub fn apply(&mut self, input: Input) {
        let state = std::mem::take(&mut self.state);
        let transition = state.apply(input);
        self.state = transition.state;

        match transition.display {
            Some(text) => {
                tracing::debug!(
                    ?input,
                    mode = ?self.state.mode(),
                    display = %text,
                    "calculator input handled"
                );
                self.display.set_text(&text);
            }
            None => {
                tracing::trace!(?input, mode = ?self.state.mode(), "display unchanged");
            }
        }
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> &CalcState {
        &self.state
    }

    /// The display sink
    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Mutable access to the display sink
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Consumes the calculator, returning the display sink
    pub fn into_display(self) -> D {
        self.display
    }
}
