//! Browser bindings for the calculator page
//!
//! The page's click handlers call [`BrowserCalculator::handle_button`] with
//! the clicked element; the calculator writes to the panel element directly.

// Note: This module is already conditionally compiled via #[cfg(feature = "wasm")] in mod.rs

use wasm_bindgen::prelude::*;
use web_sys::{console, Element};

use crate::calculator::{Calculator, DisplaySink};
use crate::config::BindingConfig;
use crate::wasm::keypad::WasmKeypad;

/// Display sink backed by a real DOM element
#[derive(Debug)]
pub struct BrowserPanel {
    element: Element,
}

impl DisplaySink for BrowserPanel {
    fn set_text(&mut self, text: &str) {
        self.element.set_text_content(Some(text));
    }
}

/// Browser Calculator - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    calculator: Calculator<BrowserPanel>,
    keypad: WasmKeypad,
    operator_class: String,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Binds to the default page elements
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<BrowserCalculator, JsValue> {
        Self::bind(&BindingConfig::default())
    }

    /// Binds to the elements named by a JSON binding configuration
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<BrowserCalculator, JsValue> {
        let config = BindingConfig::from_json(json).map_err(to_js)?;
        Self::bind(&config)
    }

    /// Text on the panel
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.calculator.state().display_text().to_string()
    }

    /// Handles a click on the element with `id` carrying `class_name`
    #[wasm_bindgen(js_name = handleButton)]
    pub fn handle_button(&mut self, id: &str, class_name: &str) -> Result<(), JsValue> {
        let mut element = crate::wasm::DomElement::new("button").with_id(id);
        for class in class_name.split_whitespace() {
            element.add_class(class);
        }
        let input = self.keypad.handle_element(&element).map_err(to_js)?;
        self.calculator.apply(input);
        Ok(())
    }

    /// Class the page uses for operator buttons
    #[wasm_bindgen(getter, js_name = operatorClass)]
    pub fn operator_class(&self) -> String {
        self.operator_class.clone()
    }
}

impl BrowserCalculator {
    fn bind(config: &BindingConfig) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let element = document
            .get_element_by_id(&config.panel_id)
            .ok_or_else(|| JsValue::from_str(&format!("missing panel #{}", config.panel_id)))?;
        let keypad = WasmKeypad::from_config(config).map_err(to_js)?;

        Ok(Self {
            calculator: Calculator::new(BrowserPanel { element }),
            keypad,
            operator_class: config.operator_class.clone(),
        })
    }
}

fn to_js(err: crate::core::CalcError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Initialize the calculator in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Calculator WASM initialized".into());
}
