//! Pocket Calc - click-driven four-function calculator
//!
//! A small state machine decides what each button click does to the two
//! pending operands, and a display sink shows the result. Operators are
//! applied strictly left to right, one at a time, like a hardware pocket
//! calculator: `1 +/= 4 * 3 +/=` shows `15`, not `13`.
//!
//! The `+/=` key is both addition and equals. It evaluates whatever is
//! pending and parks on the result; every other operator evaluates and
//! immediately arms itself as the next pending operation.
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::prelude::*;
//!
//! let mut calc = Calculator::new(String::new());
//! calc.on_digit(Digit::new(8).unwrap());
//! calc.on_operator(Operator::Subtract);
//! calc.on_digit(Digit::new(3).unwrap());
//! calc.on_operator(Operator::AddEquals);
//! assert_eq!(calc.display(), "5");
//!
//! // a digit after a result starts over
//! calc.on_digit(Digit::new(2).unwrap());
//! assert_eq!(calc.display(), "2");
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod calculator;
pub mod config;
pub mod core;
pub mod driver;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

/// Calculator page bindings - always available
/// (Mock DOM allows testing without actual browser bindings)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::calculator::{Calculator, DisplaySink};
    pub use crate::config::BindingConfig;
    pub use crate::core::{
        evaluate, CalcError, CalcResult, CalcState, Digit, Input, Mode, Operator, Transition,
    };
    pub use crate::driver::CalculatorDriver;

    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmDriver, WasmKeypad};
}
