// SPDX-License-Identifier: MPL-2.0
//! Required-field validation of an order form.
//!
//! Every required control is checked and marked independently, so the user
//! sees all problems at once. An order also needs at least one item row.

use crate::application::port::{FormControl, OrderFormView};
use crate::i18n::I18n;

/// Errors collected by one validation pass, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<String>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    #[must_use]
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

/// Human-readable name of a failing control.
///
/// Priority: associated label text, `name`, `placeholder`, then the generic
/// "Required field". Blank candidates are skipped.
pub fn control_label<V>(view: &V, control: &FormControl, i18n: &I18n) -> String
where
    V: OrderFormView + ?Sized,
{
    let from_label = control
        .id
        .as_deref()
        .and_then(|id| view.label_for(id))
        .map(|text| text.trim().to_string());

    [from_label, control.name.clone(), control.placeholder.clone()]
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.is_empty())
        .unwrap_or_else(|| i18n.tr("validation-required-field"))
}

/// Validates `view`, updating its error markers and error panel.
pub fn validate<V>(view: &mut V, i18n: &I18n) -> ValidationReport
where
    V: OrderFormView + ?Sized,
{
    let mut errors = Vec::new();

    for (index, control) in view.required_controls().iter().enumerate() {
        let filled = control.is_filled();
        view.set_invalid(index, !filled);
        if !filled {
            errors.push(control_label(&*view, control, i18n));
        }
    }

    if view.item_rows().is_empty() {
        errors.push(i18n.tr("validation-item-line"));
    }

    match view.error_panel() {
        Some(panel) if !errors.is_empty() => {
            panel.show(&i18n.tr("validation-header"), &errors);
            panel.scroll_into_view();
        }
        Some(panel) => panel.hide(),
        None => {
            if !errors.is_empty() {
                tracing::warn!(
                    count = errors.len(),
                    "validation failed but form has no error panel"
                );
            }
        }
    }

    if !errors.is_empty() {
        tracing::debug!(?errors, "order form validation failed");
    }
    ValidationReport { errors }
}
