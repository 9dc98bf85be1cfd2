//! Mock DOM for exercising the calculator page without a browser
//!
//! Holds the panel and the button elements by id, records click events and
//! acts as the calculator's display by writing the panel's text content.

use std::collections::HashMap;

use crate::calculator::DisplaySink;
use crate::config::BindingConfig;
use crate::core::INITIAL_OPERAND;
use crate::wasm::keypad::WasmKeypad;

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// CSS classes
    pub classes: Vec<String>,
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            classes: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Adds a class
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// DOM events the calculator page reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }
}

/// Mock DOM for testing the calculator page without a browser
#[derive(Debug)]
pub struct MockDom {
    /// Elements by ID for quick lookup
    elements: HashMap<String, DomElement>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
    /// Element the calculator writes to
    panel_id: String,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty mock DOM with a `calc-panel` display id
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: HashMap::new(),
            event_history: Vec::new(),
            panel_id: BindingConfig::default().panel_id,
        }
    }

    /// Creates the calculator page: display panel plus every keypad button
    #[must_use]
    pub fn calculator(config: &BindingConfig, keypad: &WasmKeypad) -> Self {
        let mut dom = Self::new();
        dom.panel_id = config.panel_id.clone();

        dom.register_element(
            DomElement::new("div")
                .with_id(&config.panel_id)
                .with_class("calc-panel")
                .with_text(INITIAL_OPERAND),
        );
        for button in keypad.create_dom_elements() {
            dom.register_element(button);
        }
        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Number of registered elements
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Records an event
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Id of the display panel
    #[must_use]
    pub fn panel_id(&self) -> &str {
        &self.panel_id
    }

    /// Text currently shown on the panel
    #[must_use]
    pub fn panel_text(&self) -> Option<&str> {
        self.get_element_text(&self.panel_id)
    }
}

impl DisplaySink for MockDom {
    fn set_text(&mut self, text: &str) {
        match self.elements.get_mut(&self.panel_id) {
            Some(panel) => panel.set_text(text),
            None => tracing::warn!(panel = %self.panel_id, "display panel missing from DOM"),
        }
    }
}
