//! The click state machine
//!
//! ```text
//!   TypingOne --operator--> AwaitingTwo --digit/decimal--> TypingTwo
//!       ^                     ^      ^                        |   |
//!       |                     |      +---- other operator ----+   |
//!       |                  operator                               | add-equals
//!       |                     |                                   v
//!       +-- digit/decimal -- ShowingResult <---------------------+
//! ```
//!
//! Every operator other than add-equals pressed while typing operand two
//! evaluates immediately and rolls the result into a new pending operation.
//! Add-equals evaluates and parks on the result.

use serde::{Deserialize, Serialize};

use crate::core::{evaluate, Digit, Input, Operator};

/// Operand one of a freshly cleared calculator
pub const INITIAL_OPERAND: &str = "0";

/// Calculator state, one variant per interaction mode
///
/// Each variant carries only the fields that mode needs, so "operator set but
/// operand two missing" style combinations cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CalcState {
    /// Typing operand one
    TypingOne {
        /// Text typed so far
        operand_one: String,
    },
    /// Operator accepted, operand two not started
    AwaitingTwo {
        /// First operand
        operand_one: String,
        /// Pending operator
        operation: Operator,
    },
    /// Typing operand two
    TypingTwo {
        /// First operand
        operand_one: String,
        /// Pending operator
        operation: Operator,
        /// Text typed so far, never empty
        operand_two: String,
    },
    /// Showing a finished evaluation
    ShowingResult {
        /// First operand of the evaluation
        operand_one: String,
        /// Operator that was evaluated
        operation: Operator,
        /// Second operand of the evaluation
        operand_two: String,
        /// Formatted result
        result: String,
    },
}

/// Mode tag of a [`CalcState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// See [`CalcState::TypingOne`]
    TypingOne,
    /// See [`CalcState::AwaitingTwo`]
    AwaitingTwo,
    /// See [`CalcState::TypingTwo`]
    TypingTwo,
    /// See [`CalcState::ShowingResult`]
    ShowingResult,
}

/// Outcome of one input
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Transition {
    /// The state after the input
    pub state: CalcState,
    /// Text to write to the display, if it must be rewritten
    pub display: Option<String>,
}

impl Transition {
    fn show(state: CalcState, text: impl Into<String>) -> Self {
        Self {
            state,
            display: Some(text.into()),
        }
    }

    fn quiet(state: CalcState) -> Self {
        Self {
            state,
            display: None,
        }
    }
}

impl Default for CalcState {
    fn default() -> Self {
        Self::TypingOne {
            operand_one: INITIAL_OPERAND.to_string(),
        }
    }
}

impl CalcState {
    /// Creates the initial state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mode tag
    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self {
            Self::TypingOne { .. } => Mode::TypingOne,
            Self::AwaitingTwo { .. } => Mode::AwaitingTwo,
            Self::TypingTwo { .. } => Mode::TypingTwo,
            Self::ShowingResult { .. } => Mode::ShowingResult,
        }
    }

    /// First operand
    #[must_use]
    pub fn operand_one(&self) -> &str {
        match self {
            Self::TypingOne { operand_one }
            | Self::AwaitingTwo { operand_one, .. }
            | Self::TypingTwo { operand_one, .. }
            | Self::ShowingResult { operand_one, .. } => operand_one,
        }
    }

    /// Second operand; `Some("")` once an operator is armed but nothing typed
    #[must_use]
    pub fn operand_two(&self) -> Option<&str> {
        match self {
            Self::TypingOne { .. } => None,
            Self::AwaitingTwo { .. } => Some(""),
            Self::TypingTwo { operand_two, .. } | Self::ShowingResult { operand_two, .. } => {
                Some(operand_two)
            }
        }
    }

    /// Pending (or last evaluated) operator
    #[must_use]
    pub const fn operation(&self) -> Option<Operator> {
        match self {
            Self::TypingOne { .. } => None,
            Self::AwaitingTwo { operation, .. }
            | Self::TypingTwo { operation, .. }
            | Self::ShowingResult { operation, .. } => Some(*operation),
        }
    }

    /// Result of the last evaluation, only while it is being shown
    #[must_use]
    pub fn result(&self) -> Option<&str> {
        match self {
            Self::ShowingResult { result, .. } => Some(result),
            _ => None,
        }
    }

    /// Text the display shows in this state
    #[must_use]
    pub fn display_text(&self) -> &str {
        match self {
            Self::TypingOne { operand_one } | Self::AwaitingTwo { operand_one, .. } => operand_one,
            Self::TypingTwo { operand_two, .. } => operand_two,
            Self::ShowingResult { result, .. } => result,
        }
    }

    /// Applies one input
    pub fn apply(self, input: Input) -> Transition {
        match input {
            Input::Digit(d) => self.on_digit(d),
            Input::Decimal => self.on_decimal(),
            Input::Operator(op) => self.on_operator(op),
            Input::Clear => Self::on_clear(),
        }
    }

    /// A digit key was clicked
    pub fn on_digit(self, digit: Digit) -> Transition {
        match self {
            Self::ShowingResult { .. } => Self::default().on_digit(digit),
            Self::TypingOne { mut operand_one } => {
                if operand_one == INITIAL_OPERAND {
                    operand_one.clear();
                }
                operand_one.push(digit.as_char());
                let shown = operand_one.clone();
                Transition::show(Self::TypingOne { operand_one }, shown)
            }
            Self::AwaitingTwo {
                operand_one,
                operation,
            } => {
                let operand_two = digit.as_char().to_string();
                let shown = operand_two.clone();
                Transition::show(
                    Self::TypingTwo {
                        operand_one,
                        operation,
                        operand_two,
                    },
                    shown,
                )
            }
            Self::TypingTwo {
                operand_one,
                operation,
                mut operand_two,
            } => {
                operand_two.push(digit.as_char());
                let shown = operand_two.clone();
                Transition::show(
                    Self::TypingTwo {
                        operand_one,
                        operation,
                        operand_two,
                    },
                    shown,
                )
            }
        }
    }

    /// The decimal point key was clicked
    ///
    /// A second point on the same operand is ignored.
    pub fn on_decimal(self) -> Transition {
        match self {
            Self::ShowingResult { .. } => Self::default().on_decimal(),
            Self::TypingOne { operand_one } if operand_one.contains('.') => {
                Transition::quiet(Self::TypingOne { operand_one })
            }
            Self::TypingOne { mut operand_one } => {
                operand_one.push('.');
                let shown = operand_one.clone();
                Transition::show(Self::TypingOne { operand_one }, shown)
            }
            Self::AwaitingTwo {
                operand_one,
                operation,
            } => Transition::show(
                Self::TypingTwo {
                    operand_one,
                    operation,
                    operand_two: ".".to_string(),
                },
                ".",
            ),
            Self::TypingTwo {
                operand_one,
                operation,
                operand_two,
            } if operand_two.contains('.') => Transition::quiet(Self::TypingTwo {
                operand_one,
                operation,
                operand_two,
            }),
            Self::TypingTwo {
                operand_one,
                operation,
                mut operand_two,
            } => {
                operand_two.push('.');
                let shown = operand_two.clone();
                Transition::show(
                    Self::TypingTwo {
                        operand_one,
                        operation,
                        operand_two,
                    },
                    shown,
                )
            }
        }
    }

    /// An operator key was clicked
    pub fn on_operator(self, op: Operator) -> Transition {
        match self {
            Self::ShowingResult { result, .. } => Transition::quiet(Self::AwaitingTwo {
                operand_one: result,
                operation: op,
            }),
            Self::TypingTwo {
                operand_one,
                operation,
                operand_two,
            } => {
                let result = evaluate(&operand_one, operation, &operand_two);
                if op.is_equals() {
                    let shown = result.clone();
                    Transition::show(
                        Self::ShowingResult {
                            operand_one,
                            operation,
                            operand_two,
                            result,
                        },
                        shown,
                    )
                } else {
                    let shown = result.clone();
                    Transition::show(
                        Self::AwaitingTwo {
                            operand_one: result,
                            operation: op,
                        },
                        shown,
                    )
                }
            }
            Self::TypingOne { operand_one } | Self::AwaitingTwo { operand_one, .. } => {
                Transition::quiet(Self::AwaitingTwo {
                    operand_one,
                    operation: op,
                })
            }
        }
    }

    /// The clear key was clicked
    pub fn on_clear() -> Transition {
        Transition::show(Self::default(), INITIAL_OPERAND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(d: u8) -> Digit {
        Digit::new(d).unwrap()
    }

    fn run(inputs: &[Input]) -> (CalcState, Vec<String>) {
        let mut state = CalcState::new();
        let mut shown = Vec::new();
        for &input in inputs {
            let t = state.apply(input);
            state = t.state;
            shown.extend(t.display);
        }
        (state, shown)
    }

    fn digits(text: &str) -> Vec<Input> {
        text.chars()
            .map(|c| Input::Digit(Digit::try_from(c).unwrap()))
            .collect()
    }

    // ===== Initial state =====

    #[test]
    fn test_initial_state() {
        let state = CalcState::new();
        assert_eq!(state.mode(), Mode::TypingOne);
        assert_eq!(state.operand_one(), "0");
        assert_eq!(state.operand_two(), None);
        assert_eq!(state.operation(), None);
        assert_eq!(state.result(), None);
        assert_eq!(state.display_text(), "0");
    }

    // ===== Digits =====

    #[test]
    fn test_leading_zero_replaced() {
        let (state, shown) = run(&digits("05"));
        assert_eq!(state.operand_one(), "5");
        assert_eq!(shown, vec!["0", "5"]);
    }

    #[test]
    fn test_digits_concatenate() {
        let (state, _) = run(&digits("1203"));
        assert_eq!(state.operand_one(), "1203");
    }

    #[test]
    fn test_zero_only_replaced_when_alone() {
        let (state, _) = run(&[Input::Decimal, Input::Digit(digit(0)), Input::Digit(digit(7))]);
        assert_eq!(state.operand_one(), "0.07");
    }

    #[test]
    fn test_digit_after_operator_starts_operand_two() {
        let t = CalcState::new()
            .on_digit(digit(9))
            .state
            .on_operator(Operator::Multiply);
        assert_eq!(t.display, None);
        let t = t.state.on_digit(digit(0));
        assert_eq!(t.state.mode(), Mode::TypingTwo);
        assert_eq!(t.state.operand_two(), Some("0"));
        let t = t.state.on_digit(digit(5));
        // no leading-zero replacement on operand two
        assert_eq!(t.state.operand_two(), Some("05"));
        assert_eq!(t.display.as_deref(), Some("05"));
    }

    #[test]
    fn test_digit_after_result_starts_fresh() {
        let mut inputs = digits("8");
        inputs.push(Input::Operator(Operator::Subtract));
        inputs.extend(digits("3"));
        inputs.push(Input::Operator(Operator::AddEquals));
        let (state, shown) = run(&inputs);
        assert_eq!(state.result(), Some("5"));
        assert_eq!(shown.last().map(String::as_str), Some("5"));

        let t = state.on_digit(digit(2));
        assert_eq!(t.state, CalcState::TypingOne { operand_one: "2".into() });
        assert_eq!(t.display.as_deref(), Some("2"));
    }

    // ===== Decimal =====

    #[test]
    fn test_decimal_appends_once() {
        let t = CalcState::new().on_decimal();
        assert_eq!(t.state.operand_one(), "0.");
        assert_eq!(t.display.as_deref(), Some("0."));
        let t = t.state.on_decimal();
        assert_eq!(t.state.operand_one(), "0.");
        assert_eq!(t.display, None);
    }

    #[test]
    fn test_decimal_on_operand_two() {
        let (state, _) = run(&[
            Input::Digit(digit(1)),
            Input::Operator(Operator::Divide),
            Input::Decimal,
            Input::Digit(digit(5)),
            Input::Decimal,
        ]);
        assert_eq!(state.mode(), Mode::TypingTwo);
        assert_eq!(state.operand_two(), Some(".5"));
    }

    #[test]
    fn test_decimal_after_result_starts_fresh() {
        let (state, _) = run(&[
            Input::Digit(digit(1)),
            Input::Operator(Operator::AddEquals),
            Input::Digit(digit(1)),
            Input::Operator(Operator::AddEquals),
        ]);
        assert_eq!(state.result(), Some("2"));
        let t = state.on_decimal();
        assert_eq!(t.state, CalcState::TypingOne { operand_one: "0.".into() });
        assert_eq!(t.display.as_deref(), Some("0."));
    }

    // ===== Operators =====

    #[test]
    fn test_operator_from_typing_one_arms() {
        let t = CalcState::new().on_digit(digit(7)).state.on_operator(Operator::AddEquals);
        assert_eq!(t.display, None);
        assert_eq!(t.state.mode(), Mode::AwaitingTwo);
        assert_eq!(t.state.operand_two(), Some(""));
        assert_eq!(t.state.operation(), Some(Operator::AddEquals));
    }

    #[test]
    fn test_operator_as_first_click_uses_zero() {
        let (state, shown) = run(&[
            Input::Operator(Operator::Subtract),
            Input::Digit(digit(4)),
            Input::Operator(Operator::AddEquals),
        ]);
        assert_eq!(state.result(), Some("-4"));
        assert_eq!(shown.last().map(String::as_str), Some("-4"));
    }

    #[test]
    fn test_add_equals_twice_only_arms() {
        let (state, shown) = run(&[
            Input::Digit(digit(7)),
            Input::Operator(Operator::AddEquals),
            Input::Operator(Operator::AddEquals),
        ]);
        assert_eq!(state.mode(), Mode::AwaitingTwo);
        assert_eq!(state.result(), None);
        assert_eq!(state.display_text(), "7");
        assert_eq!(shown, vec!["7"]);
    }

    #[test]
    fn test_awaiting_two_switches_operator() {
        let (state, _) = run(&[
            Input::Digit(digit(6)),
            Input::Operator(Operator::AddEquals),
            Input::Operator(Operator::Divide),
            Input::Digit(digit(3)),
            Input::Operator(Operator::AddEquals),
        ]);
        assert_eq!(state.result(), Some("2"));
    }

    #[test]
    fn test_left_to_right_without_precedence() {
        let (state, shown) = run(&[
            Input::Digit(digit(1)),
            Input::Operator(Operator::AddEquals),
            Input::Digit(digit(4)),
            Input::Operator(Operator::Multiply),
            Input::Digit(digit(3)),
            Input::Operator(Operator::AddEquals),
        ]);
        assert_eq!(shown, vec!["1", "4", "5", "3", "15"]);
        assert_eq!(
            state,
            CalcState::ShowingResult {
                operand_one: "5".into(),
                operation: Operator::Multiply,
                operand_two: "3".into(),
                result: "15".into(),
            }
        );
    }

    #[test]
    fn test_chaining_operator_rolls_result_into_operand_one() {
        let (state, _) = run(&[
            Input::Digit(digit(1)),
            Input::Operator(Operator::AddEquals),
            Input::Digit(digit(4)),
            Input::Operator(Operator::Multiply),
        ]);
        assert_eq!(
            state,
            CalcState::AwaitingTwo {
                operand_one: "5".into(),
                operation: Operator::Multiply,
            }
        );
    }

    #[test]
    fn test_operator_on_result_continues_from_result() {
        let (state, _) = run(&[
            Input::Digit(digit(2)),
            Input::Operator(Operator::AddEquals),
            Input::Digit(digit(3)),
            Input::Operator(Operator::AddEquals),
        ]);
        let t = state.on_operator(Operator::AddEquals);
        assert_eq!(t.display, None);
        assert_eq!(
            t.state,
            CalcState::AwaitingTwo {
                operand_one: "5".into(),
                operation: Operator::AddEquals,
            }
        );
        let t = t.state.on_digit(digit(3)).state.on_operator(Operator::AddEquals);
        assert_eq!(t.display.as_deref(), Some("8"));
    }

    #[test]
    fn test_division_by_zero_is_shown() {
        let (state, shown) = run(&[
            Input::Digit(digit(1)),
            Input::Operator(Operator::Divide),
            Input::Digit(digit(0)),
            Input::Operator(Operator::AddEquals),
        ]);
        assert_eq!(state.result(), Some("Infinity"));
        assert_eq!(shown.last().map(String::as_str), Some("Infinity"));
    }

    // ===== Clear =====

    #[test]
    fn test_clear_from_every_mode() {
        let three = Input::Digit(digit(3));
        let one = Input::Digit(digit(1));
        let minus = Input::Operator(Operator::Subtract);
        let equals = Input::Operator(Operator::AddEquals);
        let prefixes = vec![
            vec![three],
            vec![three, minus],
            vec![three, minus, one],
            vec![three, minus, one, equals],
        ];
        for prefix in prefixes {
            let (state, _) = run(&prefix);
            let t = state.apply(Input::Clear);
            assert_eq!(t.state, CalcState::default());
            assert_eq!(t.display.as_deref(), Some("0"));
        }
    }

    // ===== Serde =====

    #[test]
    fn test_state_serializes_with_mode_tag() {
        let state = CalcState::AwaitingTwo {
            operand_one: "12".into(),
            operation: Operator::Divide,
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["mode"], "awaiting_two");
        assert_eq!(json["operation"], "div");
        let back: CalcState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }
}
