//! WASM Driver - the calculator page driven through the mock DOM
//!
//! Inputs go in as clicks on button elements and come out as the panel's
//! text, the same path a browser takes.

use super::dom::{DomEvent, MockDom};
use super::keypad::WasmKeypad;
use crate::calculator::Calculator;
use crate::config::BindingConfig;
use crate::core::{CalcError, CalcResult, CalcState, Input};
use crate::driver::CalculatorDriver;

/// Calculator wired to a mock calculator page
#[derive(Debug)]
pub struct WasmDriver {
    /// The calculator, writing to the mock DOM panel
    calculator: Calculator<MockDom>,
    /// Button binding
    keypad: WasmKeypad,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver for the default page
    #[must_use]
    pub fn new() -> Self {
        let config = BindingConfig::default();
        let keypad = WasmKeypad::new();
        let dom = MockDom::calculator(&config, &keypad);
        Self {
            calculator: Calculator::new(dom),
            keypad,
        }
    }

    /// Creates a driver for a custom page binding
    pub fn with_config(config: &BindingConfig) -> CalcResult<Self> {
        let keypad = WasmKeypad::from_config(config)?;
        let dom = MockDom::calculator(config, &keypad);
        Ok(Self {
            calculator: Calculator::new(dom),
            keypad,
        })
    }

    /// Clicks the element with `element_id`
    ///
    /// Only clicks on elements present in the page are recorded.
    pub fn click(&mut self, element_id: &str) -> CalcResult<()> {
        let dom = self.calculator.display_mut();
        let element = dom.get_element(element_id).ok_or_else(|| {
            tracing::warn!(element = element_id, "click on element missing from DOM");
            CalcError::unknown_element(element_id)
        })?;
        let input = self.keypad.handle_element(element);
        dom.dispatch_event(DomEvent::click(element_id));

        self.calculator.apply(input?);
        Ok(())
    }

    /// Text on the panel
    #[must_use]
    pub fn panel_text(&self) -> &str {
        self.calculator.display().panel_text().unwrap_or_default()
    }

    /// Returns the calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator<MockDom> {
        &self.calculator
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        self.calculator.display()
    }

    /// Returns a mutable reference to the DOM
    pub fn dom_mut(&mut self) -> &mut MockDom {
        self.calculator.display_mut()
    }

    /// Returns the keypad binding
    #[must_use]
    pub fn keypad(&self) -> &WasmKeypad {
        &self.keypad
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, input: Input) -> CalcResult<()> {
        let id = self
            .keypad
            .find_button_by_input(input)
            .map(|btn| btn.id.clone())
            .ok_or_else(|| CalcError::unknown_element(format!("{input:?}")))?;
        self.click(&id)
    }

    fn display_text(&self) -> String {
        self.panel_text().to_string()
    }

    fn state(&self) -> &CalcState {
        self.calculator.state()
    }
}
