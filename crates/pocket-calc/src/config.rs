//! Button binding configuration
//!
//! Names the page elements the calculator is wired to. The defaults match
//! the stock calculator page: digit buttons `zero`..`nine` with class
//! `calc-num`, operator buttons whose ids are the operator identifiers with
//! class `calc-op`, plus `calc-dec`, `calc-clear` and the `calc-panel`
//! display.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult, Digit, Operator};

const DIGIT_IDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Element ids and classes for the calculator page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingConfig {
    /// Element that shows the current value
    pub panel_id: String,
    /// Decimal point button
    pub decimal_id: String,
    /// Clear button
    pub clear_id: String,
    /// Class shared by the digit buttons
    pub digit_class: String,
    /// Class shared by the operator buttons
    pub operator_class: String,
    /// Digit button ids, indexed by digit value
    pub digit_ids: [String; 10],
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            panel_id: "calc-panel".to_string(),
            decimal_id: "calc-dec".to_string(),
            clear_id: "calc-clear".to_string(),
            digit_class: "calc-num".to_string(),
            operator_class: "calc-op".to_string(),
            digit_ids: DIGIT_IDS.map(str::to_string),
        }
    }
}

impl BindingConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON configuration; missing fields keep their defaults
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the panel element id
    #[must_use]
    pub fn with_panel_id(mut self, id: impl Into<String>) -> Self {
        self.panel_id = id.into();
        self
    }

    /// Set the decimal button id
    #[must_use]
    pub fn with_decimal_id(mut self, id: impl Into<String>) -> Self {
        self.decimal_id = id.into();
        self
    }

    /// Set the clear button id
    #[must_use]
    pub fn with_clear_id(mut self, id: impl Into<String>) -> Self {
        self.clear_id = id.into();
        self
    }

    /// Set the id of one digit button
    #[must_use]
    pub fn with_digit_id(mut self, digit: Digit, id: impl Into<String>) -> Self {
        self.digit_ids[usize::from(digit.value())] = id.into();
        self
    }

    /// Id of the button for `digit`
    #[must_use]
    pub fn digit_id(&self, digit: Digit) -> &str {
        &self.digit_ids[usize::from(digit.value())]
    }

    /// Rejects empty and duplicate element ids, and a digit class equal to
    /// the operator class
    ///
    /// Operator button ids are the operator identifiers and take part in
    /// the duplicate check.
    pub fn validate(&self) -> CalcResult<()> {
        let mut seen = HashSet::new();
        let ids = [
            self.panel_id.as_str(),
            self.decimal_id.as_str(),
            self.clear_id.as_str(),
        ]
        .into_iter()
        .chain(self.digit_ids.iter().map(String::as_str))
        .chain(Operator::ALL.iter().map(|op| op.id()));

        for id in ids {
            if id.is_empty() {
                return Err(CalcError::config("element id must not be empty"));
            }
            if !seen.insert(id) {
                return Err(CalcError::config(format!("duplicate element id {id:?}")));
            }
        }

        if self.digit_class.is_empty() || self.operator_class.is_empty() {
            return Err(CalcError::config("button class must not be empty"));
        }
        // operator-class elements are read as operator ids
        if self.digit_class == self.operator_class {
            return Err(CalcError::config(format!(
                "digit and operator buttons share class {:?}",
                self.digit_class
            )));
        }
        Ok(())
    }
}
