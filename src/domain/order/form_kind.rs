// SPDX-License-Identifier: MPL-2.0
//! The two order forms the storefront knows about.

use std::fmt;
use std::str::FromStr;

/// Identity of an order form.
///
/// Each identity is bound to fixed element ids on the page and to the
/// `order_type` tag sent with the submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    /// Standard products ordered from the quick form.
    Quick,
    /// Large-format work ordered from the proof-request form.
    Large,
}

impl FormKind {
    /// All known forms, in page order.
    pub const ALL: [FormKind; 2] = [FormKind::Quick, FormKind::Large];

    /// Value of the `order_type` field.
    #[must_use]
    pub fn order_type(self) -> &'static str {
        match self {
            FormKind::Quick => "quick",
            FormKind::Large => "large",
        }
    }

    /// Element id of the form itself.
    #[must_use]
    pub fn form_id(self) -> &'static str {
        match self {
            FormKind::Quick => "quickOrderForm",
            FormKind::Large => "largeOrderForm",
        }
    }

    /// Element id of the form's error panel.
    #[must_use]
    pub fn error_panel_id(self) -> &'static str {
        match self {
            FormKind::Quick => "quickErrors",
            FormKind::Large => "largeErrors",
        }
    }

    /// Element id of the container holding the form's item rows.
    #[must_use]
    pub fn items_container_id(self) -> &'static str {
        match self {
            FormKind::Quick => "quickItems",
            FormKind::Large => "largeItems",
        }
    }

    /// Resolves a form element id back to its identity.
    #[must_use]
    pub fn from_form_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.form_id() == id)
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.order_type())
    }
}

impl FromStr for FormKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quick" => Ok(FormKind::Quick),
            "large" => Ok(FormKind::Large),
            other => Err(format!("unknown order form '{other}' (expected quick or large)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_type_tags() {
        assert_eq!(FormKind::Quick.order_type(), "quick");
        assert_eq!(FormKind::Large.order_type(), "large");
    }

    #[test]
    fn element_ids_are_distinct_per_form() {
        assert_ne!(FormKind::Quick.form_id(), FormKind::Large.form_id());
        assert_eq!(FormKind::Quick.items_container_id(), "quickItems");
        assert_eq!(FormKind::Large.error_panel_id(), "largeErrors");
    }

    #[test]
    fn from_form_id_round_trips() {
        for kind in FormKind::ALL {
            assert_eq!(FormKind::from_form_id(kind.form_id()), Some(kind));
        }
        assert_eq!(FormKind::from_form_id("contactForm"), None);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(" Large ".parse::<FormKind>(), Ok(FormKind::Large));
        assert!("bulk".parse::<FormKind>().is_err());
    }
}
