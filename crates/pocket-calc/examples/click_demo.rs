//! Mock Page Demo
//!
//! Clicks through the stock calculator page in the mock DOM, then runs the
//! shared driver specifications against it.
//!
//! Run with: cargo run --example click_demo
//! Set `POCKET_CALC_LOG=debug` to watch every display update.

use pocket_calc::driver::{
    verify_add_equals_arming, verify_chaining, verify_clear, verify_decimal_idempotent,
    verify_digit_entry, verify_division_by_zero, verify_left_to_right, verify_result_then_digit,
};
use pocket_calc::prelude::*;
use pocket_calc::wasm::label;

fn click(driver: &mut WasmDriver, ids: &[&str]) {
    for id in ids {
        if let Err(err) = driver.click(id) {
            println!("   click #{id} rejected: {err}");
            continue;
        }
        println!("   #{id:<11} panel = {:?}", driver.panel_text());
    }
}

fn main() {
    pocket_calc::logging::init();

    println!("Pocket Calc - mock page demo");
    println!();

    let mut driver = WasmDriver::new();
    let dom = driver.dom();
    println!("Page: {} elements, panel #{}", dom.element_count(), dom.panel_id());
    let (rows, cols) = driver.keypad().dimensions();
    println!("Keypad ({rows}x{cols}):");
    for button in driver.keypad().buttons() {
        println!("   [{},{}] {:<4} #{}", button.row, button.col, label(button.input), button.id);
    }

    println!("\n1 +/= 4 * 3 +/=");
    click(&mut driver, &["one", "add-equals", "four", "mult", "three", "add-equals"]);

    println!("\nA digit after a result starts over");
    click(&mut driver, &["two"]);

    println!("\n.1 +/= .2 +/=");
    click(
        &mut driver,
        &["calc-clear", "calc-dec", "one", "add-equals", "calc-dec", "two", "add-equals"],
    );

    println!("\nUnbound element");
    click(&mut driver, &["calc-panel"]);

    println!("\nRecorded clicks: {}", driver.dom().event_history().len());

    println!("\nShared specifications on the mock page:");
    let specs: [(&str, fn(&mut WasmDriver)); 8] = [
        ("verify_digit_entry", verify_digit_entry),
        ("verify_decimal_idempotent", verify_decimal_idempotent),
        ("verify_clear", verify_clear),
        ("verify_left_to_right", verify_left_to_right),
        ("verify_add_equals_arming", verify_add_equals_arming),
        ("verify_result_then_digit", verify_result_then_digit),
        ("verify_chaining", verify_chaining),
        ("verify_division_by_zero", verify_division_by_zero),
    ];
    for (name, spec) in specs {
        spec(&mut WasmDriver::new());
        println!("   ok  {name}");
    }
}
