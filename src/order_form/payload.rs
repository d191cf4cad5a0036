// SPDX-License-Identifier: MPL-2.0
//! Submission payload assembly.

use serde::Serialize;

use crate::domain::order::{FormField, FormKind, OrderItemLine, OrderPayload};
use crate::error::Result;

/// Name of the synthesized field carrying the serialized item rows.
pub const ITEMS_FIELD: &str = "items_json";

/// Name of the synthesized field carrying the form identity.
pub const ORDER_TYPE_FIELD: &str = "order_type";

/// One item row as the backend reads it from `items_json`.
#[derive(Debug, Serialize)]
struct ItemRecord<'a> {
    qty: &'a str,
    desc: &'a str,
    material: &'a str,
    notes: &'a str,
}

impl<'a> From<&'a OrderItemLine> for ItemRecord<'a> {
    fn from(line: &'a OrderItemLine) -> Self {
        Self {
            qty: line.qty.trim(),
            desc: line.desc.trim(),
            material: line.material.trim(),
            notes: line.notes.trim(),
        }
    }
}

/// Serializes the non-blank rows as a JSON array.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn items_json(rows: &[OrderItemLine]) -> Result<String> {
    let records: Vec<ItemRecord<'_>> = rows
        .iter()
        .filter(|row| !row.is_blank())
        .map(ItemRecord::from)
        .collect();
    Ok(serde_json::to_string(&records)?)
}

/// Builds the multipart payload for `kind` from the form's encoded fields and
/// its item rows.
///
/// `order_type` and `items_json` replace any same-named fields the form
/// already carries.
///
/// # Errors
///
/// Returns an error if the item rows cannot be serialized.
pub fn build_payload(
    kind: FormKind,
    fields: Vec<FormField>,
    rows: &[OrderItemLine],
) -> Result<OrderPayload> {
    let mut payload = OrderPayload::new(fields);
    payload.set(ORDER_TYPE_FIELD, kind.order_type());
    payload.set(ITEMS_FIELD, items_json(rows)?);
    Ok(payload)
}
