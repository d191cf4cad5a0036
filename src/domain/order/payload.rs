// SPDX-License-Identifier: MPL-2.0
//! Multipart submission payload.
//!
//! Mirrors the semantics of a browser `FormData`: an ordered list of named
//! entries where a name may repeat, and [`OrderPayload::set`] replaces every
//! entry of that name with a single one.

/// A file selected in a file input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttachment {
    pub file_name: String,
    /// MIME type, when the host knows it.
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Value of one form entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    File(FileAttachment),
}

impl FieldValue {
    /// Returns the text value, or `None` for files.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::File(_) => None,
        }
    }
}

/// One named form entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: FieldValue,
}

impl FormField {
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Text(value.into()),
        }
    }

    #[must_use]
    pub fn file(name: impl Into<String>, attachment: FileAttachment) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::File(attachment),
        }
    }
}

/// Ordered multipart body of an order submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderPayload {
    fields: Vec<FormField>,
}

impl OrderPayload {
    #[must_use]
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields }
    }

    /// Sets a text entry, replacing all existing entries with that name.
    ///
    /// The new entry takes the position of the first replaced one, or is
    /// appended when the name is new.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = FieldValue::Text(value.into());
        match self.fields.iter().position(|field| field.name == name) {
            Some(first) => {
                self.fields[first].value = value;
                let mut index = 0;
                self.fields.retain(|field| {
                    let keep = index <= first || field.name != name;
                    index += 1;
                    keep
                });
            }
            None => self.fields.push(FormField {
                name: name.to_string(),
                value,
            }),
        }
    }

    /// Returns the first text value stored under `name`.
    #[must_use]
    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .and_then(|field| field.value.as_text())
    }

    /// Returns every entry in order.
    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Consumes the payload, returning its entries.
    #[must_use]
    pub fn into_fields(self) -> Vec<FormField> {
        self.fields
    }
}
