//! Keypad binding: element ids to calculator inputs
//!
//! Layout:
//! ```text
//! [ 7 ] [ 8 ] [ 9 ] [  /  ]
//! [ 4 ] [ 5 ] [ 6 ] [  *  ]
//! [ 1 ] [ 2 ] [ 3 ] [  -  ]
//! [ 0 ] [ . ] [ C ] [ +/= ]
//! ```

use std::str::FromStr;

use super::dom::DomElement;
use crate::config::BindingConfig;
use crate::core::{CalcError, CalcResult, Digit, Input, Operator};

/// Returns the button label for an input
#[must_use]
pub fn label(input: Input) -> String {
    match input {
        Input::Digit(d) => d.to_string(),
        Input::Decimal => ".".to_string(),
        Input::Operator(op) => op.symbol().to_string(),
        Input::Clear => "C".to_string(),
    }
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The input this button produces
    pub input: Input,
    /// The DOM element ID for this button
    pub id: String,
    /// Class shared with buttons of the same kind, if any
    pub class: Option<String>,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

/// Keypad bound to the element ids of a [`BindingConfig`]
#[derive(Debug, Clone)]
pub struct WasmKeypad {
    /// Button definitions, row-major
    buttons: Vec<KeypadButtonDef>,
    /// Class marking operator buttons
    operator_class: String,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
}

impl WasmKeypad {
    /// Creates the keypad for the default page
    #[must_use]
    pub fn new() -> Self {
        Self::build(&BindingConfig::default())
    }

    /// Creates the keypad for a validated configuration
    pub fn from_config(config: &BindingConfig) -> CalcResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &BindingConfig) -> Self {
        let digit = |d: u8| Input::Digit(Digit::new(d).unwrap_or_default());
        let grid = [
            [digit(7), digit(8), digit(9), Input::Operator(Operator::Divide)],
            [digit(4), digit(5), digit(6), Input::Operator(Operator::Multiply)],
            [digit(1), digit(2), digit(3), Input::Operator(Operator::Subtract)],
            [digit(0), Input::Decimal, Input::Clear, Input::Operator(Operator::AddEquals)],
        ];

        let buttons = grid
            .iter()
            .enumerate()
            .flat_map(|(row, inputs)| {
                inputs.iter().enumerate().map(move |(col, &input)| {
                    let (id, class) = match input {
                        Input::Digit(d) => {
                            (config.digit_id(d).to_string(), Some(config.digit_class.clone()))
                        }
                        Input::Operator(op) => {
                            (op.id().to_string(), Some(config.operator_class.clone()))
                        }
                        Input::Decimal => (config.decimal_id.clone(), None),
                        Input::Clear => (config.clear_id.clone(), None),
                    };
                    KeypadButtonDef {
                        input,
                        id,
                        class,
                        row,
                        col,
                    }
                })
            })
            .collect();

        Self {
            buttons,
            operator_class: config.operator_class.clone(),
            cols: 4,
            rows: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button producing `input`
    #[must_use]
    pub fn find_button_by_input(&self, input: Input) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.input == input)
    }

    /// Creates DOM elements for all keypad buttons
    #[must_use]
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons
            .iter()
            .map(|btn| {
                let elem = DomElement::new("button")
                    .with_id(&btn.id)
                    .with_text(&label(btn.input))
                    .with_class("keypad-btn")
                    .with_class(&format!("keypad-row-{}", btn.row))
                    .with_class(&format!("keypad-col-{}", btn.col));
                match &btn.class {
                    Some(class) => elem.with_class(class),
                    None => elem,
                }
            })
            .collect()
    }

    /// Maps a clicked element id to an input
    pub fn handle_click(&self, element_id: &str) -> CalcResult<Input> {
        self.find_button_by_id(element_id)
            .map(|btn| btn.input)
            .ok_or_else(|| {
                tracing::warn!(element = element_id, "click on unbound element");
                CalcError::unknown_element(element_id)
            })
    }

    /// Maps a clicked element to an input
    ///
    /// Elements carrying the operator class are read as operator
    /// identifiers, so an operator button outside the closed set is
    /// rejected here instead of reaching evaluation.
    pub fn handle_element(&self, element: &DomElement) -> CalcResult<Input> {
        if element.has_class(&self.operator_class) {
            return Operator::from_str(&element.id).map(Input::Operator);
        }
        self.handle_click(&element.id)
    }
}

impl Default for WasmKeypad {
    fn default() -> Self {
        Self::new()
    }
}
