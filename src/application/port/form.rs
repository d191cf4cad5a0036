// SPDX-License-Identifier: MPL-2.0
//! Order form port: controls, item rows, error panel and submit button.

use crate::domain::order::{FormField, OrderItemLine};

/// How a required control decides whether it is filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Valid when checked.
    Checkbox,
    /// Valid when the trimmed value is non-empty.
    Text,
}

/// Snapshot of a control flagged as required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormControl {
    pub id: Option<String>,
    pub name: Option<String>,
    pub placeholder: Option<String>,
    pub kind: ControlKind,
    pub value: String,
    pub checked: bool,
}

impl FormControl {
    /// A required text-like control.
    #[must_use]
    pub fn text(name: &str, value: &str) -> Self {
        Self {
            id: None,
            name: Some(name.to_string()),
            placeholder: None,
            kind: ControlKind::Text,
            value: value.to_string(),
            checked: false,
        }
    }

    /// A required checkbox.
    #[must_use]
    pub fn checkbox(name: &str, checked: bool) -> Self {
        Self {
            id: None,
            name: Some(name.to_string()),
            placeholder: None,
            kind: ControlKind::Checkbox,
            value: String::new(),
            checked,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    #[must_use]
    pub fn without_name(mut self) -> Self {
        self.name = None;
        self
    }

    /// Returns `true` if the control satisfies its required flag.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        match self.kind {
            ControlKind::Checkbox => self.checked,
            ControlKind::Text => !self.value.trim().is_empty(),
        }
    }
}

/// Panel listing the problems that blocked a submission.
pub trait ErrorPanel {
    /// Fills the panel with a header and one bullet per message, and shows it.
    fn show(&mut self, header: &str, messages: &[String]);

    /// Hides the panel and removes its content.
    fn hide(&mut self);

    fn scroll_into_view(&mut self);
}

/// The form's submit control.
pub trait SubmitButton {
    fn label(&self) -> String;
    fn set_label(&mut self, label: &str);
    fn set_disabled(&mut self, disabled: bool);
}

/// One order form on the page.
pub trait OrderFormView {
    /// Controls flagged as required, in document order.
    fn required_controls(&self) -> Vec<FormControl>;

    /// Text of the `label[for=control_id]` element, if any.
    fn label_for(&self, control_id: &str) -> Option<String>;

    /// Sets or clears the error marker of the required control at `index`
    /// (position in [`required_controls`](Self::required_controls)).
    fn set_invalid(&mut self, index: usize, invalid: bool);

    /// Values of every item row in the form's items container, blank rows
    /// included. Empty when the container is absent.
    fn item_rows(&self) -> Vec<OrderItemLine>;

    /// The form's named entries, as a browser would encode them.
    fn fields(&self) -> Vec<FormField>;

    /// Restores every control to its initial value.
    fn reset(&mut self);

    fn error_panel(&mut self) -> Option<&mut dyn ErrorPanel>;

    fn submit_button(&mut self) -> Option<&mut dyn SubmitButton>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_control_requires_non_blank_value() {
        assert!(!FormControl::text("email", "   ").is_filled());
        assert!(FormControl::text("email", " a@b.c ").is_filled());
    }

    #[test]
    fn checkbox_requires_checked() {
        assert!(!FormControl::checkbox("terms", false).is_filled());
        assert!(FormControl::checkbox("terms", true).is_filled());
    }
}
