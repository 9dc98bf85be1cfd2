//! Property-based tests for the click state machine
//!
//! Error prevention: property tests catch the click sequences nobody thinks
//! to write down.

use pocket_calc::core::{evaluate, format_number, parse_operand, INITIAL_OPERAND};
use pocket_calc::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = Digit> {
    (0u8..=9u8).prop_map(|d| Digit::new(d).unwrap())
}

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::AddEquals),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

/// Digits are weighted up so operands get some length
fn input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        6 => digit_strategy().prop_map(Input::Digit),
        1 => Just(Input::Decimal),
        2 => operator_strategy().prop_map(Input::Operator),
        1 => Just(Input::Clear),
    ]
}

fn inputs_strategy() -> impl Strategy<Value = Vec<Input>> {
    prop::collection::vec(input_strategy(), 0..40)
}

fn run(inputs: &[Input]) -> Calculator<Vec<String>> {
    let mut calc = Calculator::new(Vec::new());
    for &input in inputs {
        calc.apply(input);
    }
    calc
}

fn is_typed_operand(text: &str) -> bool {
    !text.is_empty()
        && text.chars().all(|c| c.is_ascii_digit() || c == '.')
        && text.matches('.').count() <= 1
}

// ===== Display invariants =====

proptest! {
    /// The last text written always matches what the state says is shown
    #[test]
    fn prop_display_tracks_state(inputs in inputs_strategy()) {
        let calc = run(&inputs);
        let last = calc.display().last().map(String::as_str);
        prop_assert_eq!(last, Some(calc.state().display_text()));
    }

    /// Clear always shows "0" and restores the initial state
    #[test]
    fn prop_clear_resets(inputs in inputs_strategy()) {
        let mut calc = run(&inputs);
        calc.on_clear();
        prop_assert_eq!(calc.display().last().map(String::as_str), Some(INITIAL_OPERAND));
        prop_assert_eq!(calc.state(), &CalcState::default());
    }

    /// Operator clicks only write to the display when they evaluate
    #[test]
    fn prop_operator_writes_only_on_evaluation(
        inputs in inputs_strategy(),
        op in operator_strategy(),
    ) {
        let state = run(&inputs).state().clone();
        let evaluates = state.mode() == Mode::TypingTwo;
        let transition = state.on_operator(op);
        prop_assert_eq!(transition.display.is_some(), evaluates);
    }
}

// ===== Operand invariants =====

proptest! {
    /// Operands being typed are digits with at most one decimal point
    #[test]
    fn prop_typed_operands_well_formed(inputs in inputs_strategy()) {
        let calc = run(&inputs);
        match calc.state() {
            CalcState::TypingOne { operand_one } => {
                prop_assert!(is_typed_operand(operand_one), "{:?}", operand_one);
            }
            CalcState::TypingTwo { operand_two, .. } => {
                prop_assert!(is_typed_operand(operand_two), "{:?}", operand_two);
            }
            _ => {}
        }
    }

    /// Fresh digit entry concatenates, replacing a lone leading zero
    #[test]
    fn prop_digit_entry_concatenates(digits in prop::collection::vec(digit_strategy(), 1..20)) {
        let inputs: Vec<Input> = digits.iter().copied().map(Input::Digit).collect();
        let calc = run(&inputs);

        let typed: String = digits.iter().map(|d| d.as_char()).collect();
        let trimmed = typed.trim_start_matches('0');
        let expected = if trimmed.is_empty() { "0" } else { trimmed };
        prop_assert_eq!(calc.state().operand_one(), expected);
    }

    /// A second decimal click never changes anything
    #[test]
    fn prop_decimal_twice_idempotent(inputs in inputs_strategy()) {
        let once = run(&inputs).state().clone().on_decimal().state;
        let twice = once.clone().on_decimal();
        prop_assert_eq!(twice.display, None);
        prop_assert_eq!(twice.state, once);
    }

    /// A digit after a shown result starts a fresh operand one
    #[test]
    fn prop_digit_after_result_starts_fresh(
        mut inputs in inputs_strategy(),
        second in digit_strategy(),
        digit in digit_strategy(),
    ) {
        // any state, then "- <digit> +/=" always ends on a result
        inputs.extend([
            Input::Operator(Operator::Subtract),
            Input::Digit(second),
            Input::Operator(Operator::AddEquals),
        ]);
        let state = run(&inputs).state().clone();
        prop_assert_eq!(state.mode(), Mode::ShowingResult);
        let next = state.on_digit(digit).state;
        prop_assert_eq!(next, CalcState::TypingOne { operand_one: digit.to_string() });
    }
}

// ===== Evaluation invariants =====

proptest! {
    /// A shown result is always the evaluation of the stored operands
    #[test]
    fn prop_result_matches_operands(inputs in inputs_strategy()) {
        let calc = run(&inputs);
        if let CalcState::ShowingResult { operand_one, operation, operand_two, result } = calc.state() {
            prop_assert_eq!(result, &evaluate(operand_one, *operation, operand_two));
        }
    }

    /// `a op1 b op2 c +/=` evaluates strictly left to right
    #[test]
    fn prop_left_to_right(
        a in 0u32..100_000,
        b in 1u32..100_000,
        c in 1u32..100_000,
        op1 in operator_strategy(),
        op2 in operator_strategy(),
    ) {
        let mut driver = Calculator::default();
        driver.type_digits(&a.to_string()).unwrap();
        driver.operator(op1).unwrap();
        driver.type_digits(&b.to_string()).unwrap();
        driver.operator(op2).unwrap();
        if op2 == Operator::AddEquals {
            // add-equals parks on the first result; press it again to chain
            driver.operator(Operator::AddEquals).unwrap();
        }
        driver.type_digits(&c.to_string()).unwrap();
        driver.operator(Operator::AddEquals).unwrap();

        let first = format_number(op1.apply(f64::from(a), f64::from(b)));
        let expected = format_number(op2.apply(parse_operand(&first), f64::from(c)));
        prop_assert_eq!(driver.display_text(), expected);
    }

    /// Formatted results read back as the same number
    #[test]
    fn prop_format_parse_round_trip(value in any::<f64>()) {
        let back = parse_operand(&format_number(value));
        if value.is_nan() {
            prop_assert!(back.is_nan());
        } else {
            prop_assert_eq!(back, value);
        }
    }
}
