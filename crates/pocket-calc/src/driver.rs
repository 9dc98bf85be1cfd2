//! Unified calculator driver
//!
//! Click sequences are written once against [`CalculatorDriver`] and run
//! against every front end: the bare controller and the page driven through
//! the mock DOM.

// verify_* functions are assertions and panic on failure
#![allow(clippy::unwrap_used)]

use crate::calculator::Calculator;
use crate::core::{CalcResult, CalcState, Digit, Input, Operator};

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use pocket_calc::prelude::*;
///
/// fn add_two<D: CalculatorDriver>(driver: &mut D) {
///     driver.type_digits("2").unwrap();
///     driver.press(Input::Operator(Operator::AddEquals)).unwrap();
///     driver.type_digits("2").unwrap();
///     driver.press(Input::Operator(Operator::AddEquals)).unwrap();
///     assert_eq!(driver.display_text(), "4");
/// }
///
/// add_two(&mut Calculator::default());
/// add_two(&mut WasmDriver::new());
/// ```
pub trait CalculatorDriver {
    /// Presses one key
    fn press(&mut self, input: Input) -> CalcResult<()>;

    /// Text currently on the display
    fn display_text(&self) -> String;

    /// Current calculator state
    fn state(&self) -> &CalcState;

    /// Presses a sequence of keys
    fn press_all(&mut self, inputs: &[Input]) -> CalcResult<()> {
        inputs.iter().try_for_each(|&input| self.press(input))
    }

    /// Presses one digit key per character; `.` presses the decimal key
    fn type_digits(&mut self, text: &str) -> CalcResult<()> {
        text.chars().try_for_each(|ch| {
            let input = if ch == '.' {
                Input::Decimal
            } else {
                Input::Digit(Digit::try_from(ch)?)
            };
            self.press(input)
        })
    }

    /// Presses an operator key
    fn operator(&mut self, op: Operator) -> CalcResult<()> {
        self.press(Input::Operator(op))
    }

    /// Presses the clear key
    fn clear(&mut self) -> CalcResult<()> {
        self.press(Input::Clear)
    }
}

impl CalculatorDriver for Calculator<String> {
    fn press(&mut self, input: Input) -> CalcResult<()> {
        self.apply(input);
        Ok(())
    }

    fn display_text(&self) -> String {
        self.display().clone()
    }

    fn state(&self) -> &CalcState {
        Calculator::state(self)
    }
}

// ===== Unified Test Specifications =====
// These work with ANY CalculatorDriver implementation

/// Verifies digit entry and leading-zero replacement
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear().unwrap();
    driver.type_digits("0").unwrap();
    assert_eq!(driver.display_text(), "0");
    driver.type_digits("5").unwrap();
    assert_eq!(driver.display_text(), "5");
    driver.type_digits("120").unwrap();
    assert_eq!(driver.display_text(), "5120");
    assert_eq!(driver.state().operand_one(), "5120");
}

/// Verifies that a second decimal point is ignored
pub fn verify_decimal_idempotent<D: CalculatorDriver>(driver: &mut D) {
    driver.clear().unwrap();
    driver.type_digits("3.1").unwrap();
    driver.press(Input::Decimal).unwrap();
    driver.type_digits("4").unwrap();
    assert_eq!(driver.display_text(), "3.14");

    driver.operator(Operator::Multiply).unwrap();
    driver.type_digits("..2").unwrap();
    assert_eq!(driver.display_text(), ".2");
}

/// Verifies that clear resets everything
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.type_digits("42").unwrap();
    driver.operator(Operator::Subtract).unwrap();
    driver.type_digits("7").unwrap();
    driver.clear().unwrap();
    assert_eq!(driver.display_text(), "0");
    assert_eq!(driver.state(), &CalcState::default());
}

/// Verifies left-to-right evaluation without precedence
pub fn verify_left_to_right<D: CalculatorDriver>(driver: &mut D) {
    driver.clear().unwrap();
    driver.type_digits("1").unwrap();
    driver.operator(Operator::AddEquals).unwrap();
    driver.type_digits("4").unwrap();
    driver.operator(Operator::Multiply).unwrap();
    assert_eq!(driver.display_text(), "5");
    driver.type_digits("3").unwrap();
    driver.operator(Operator::AddEquals).unwrap();
    assert_eq!(driver.display_text(), "15");
}

/// Verifies that add-equals with no second operand only arms the operation
pub fn verify_add_equals_arming<D: CalculatorDriver>(driver: &mut D) {
    driver.clear().unwrap();
    driver.type_digits("7").unwrap();
    driver.operator(Operator::AddEquals).unwrap();
    assert_eq!(driver.display_text(), "7");
    driver.operator(Operator::AddEquals).unwrap();
    assert_eq!(driver.display_text(), "7");
    assert_eq!(driver.state().result(), None);
    assert_eq!(driver.state().operation(), Some(Operator::AddEquals));
}

/// Verifies that a digit after a result starts a new operand
pub fn verify_result_then_digit<D: CalculatorDriver>(driver: &mut D) {
    driver.clear().unwrap();
    driver.type_digits("8").unwrap();
    driver.operator(Operator::Subtract).unwrap();
    driver.type_digits("3").unwrap();
    driver.operator(Operator::AddEquals).unwrap();
    assert_eq!(driver.display_text(), "5");
    driver.type_digits("2").unwrap();
    assert_eq!(driver.display_text(), "2");
    assert_eq!(driver.state().operand_one(), "2");
}

/// Verifies chaining: automatic for most operators, explicit for addition
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear().unwrap();
    driver.type_digits("9").unwrap();
    driver.operator(Operator::Subtract).unwrap();
    driver.type_digits("2").unwrap();
    driver.operator(Operator::Subtract).unwrap();
    assert_eq!(driver.display_text(), "7");
    driver.type_digits("3").unwrap();
    driver.operator(Operator::AddEquals).unwrap();
    assert_eq!(driver.display_text(), "4");

    driver.operator(Operator::AddEquals).unwrap();
    driver.type_digits("6").unwrap();
    driver.operator(Operator::AddEquals).unwrap();
    assert_eq!(driver.display_text(), "10");
}

/// Verifies that division by zero is shown as-is
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.clear().unwrap();
    driver.type_digits("1").unwrap();
    driver.operator(Operator::Divide).unwrap();
    driver.type_digits("0").unwrap();
    driver.operator(Operator::AddEquals).unwrap();
    assert_eq!(driver.display_text(), "Infinity");

    driver.clear().unwrap();
    driver.operator(Operator::Divide).unwrap();
    driver.type_digits("0").unwrap();
    driver.operator(Operator::AddEquals).unwrap();
    assert_eq!(driver.display_text(), "NaN");
}

/// Runs every specification above
pub fn verify_all<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_decimal_idempotent(driver);
    verify_clear(driver);
    verify_left_to_right(driver);
    verify_add_equals_arming(driver);
    verify_result_then_digit(driver);
    verify_chaining(driver);
    verify_division_by_zero(driver);
}
