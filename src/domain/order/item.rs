// SPDX-License-Identifier: MPL-2.0
//! Free-form order item lines.

/// One line of an order: quantity, description, material and notes.
///
/// All fields are free text. [`OrderItemLine::new`] trims its inputs; rows
/// built literally are trimmed when they are tested for blankness and
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderItemLine {
    pub qty: String,
    pub desc: String,
    pub material: String,
    pub notes: String,
}

impl OrderItemLine {
    #[must_use]
    pub fn new(qty: &str, desc: &str, material: &str, notes: &str) -> Self {
        Self {
            qty: qty.trim().to_string(),
            desc: desc.trim().to_string(),
            material: material.trim().to_string(),
            notes: notes.trim().to_string(),
        }
    }

    /// Parses a `qty|desc|material|notes` line; missing trailing fields are empty.
    #[must_use]
    pub fn parse_pipe_separated(line: &str) -> Self {
        let mut parts = line.splitn(4, '|');
        let mut next = || parts.next().unwrap_or("");
        let qty = next();
        let desc = next();
        let material = next();
        let notes = next();
        Self::new(qty, desc, material, notes)
    }

    /// Returns `true` when all four fields are empty after trimming.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        [&self.qty, &self.desc, &self.material, &self.notes]
            .iter()
            .all(|field| field.trim().is_empty())
    }
}
