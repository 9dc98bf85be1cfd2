//! Calculator page bindings
//!
//! Maps button elements to calculator inputs and the panel element to the
//! display. The mock DOM lets the whole page be exercised without a browser.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::{BrowserCalculator, BrowserPanel};
pub use dom::{DomElement, DomEvent, MockDom};
pub use driver::WasmDriver;
pub use keypad::{label, KeypadButtonDef, WasmKeypad};
