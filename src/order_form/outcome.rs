// SPDX-License-Identifier: MPL-2.0
//! Routing of a submission result to the status page.
//!
//! The backend answers `{ ok, order_id?, job_id?, error?, message? }`. Field
//! checks follow loose truthiness: `false`, `null`, `0`, `""` and missing
//! values all count as absent.

use serde_json::Value;

use crate::application::port::{TransportError, TransportResponse};
use crate::i18n::I18n;

/// How a submission attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The backend accepted the order.
    Accepted { order_id: String, job_id: String },
    /// The request failed or the backend refused the order.
    Failed { message: String },
}

impl SubmissionOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted { .. })
    }

    /// Status page location for this outcome, with URL-encoded values.
    #[must_use]
    pub fn redirect_location(&self, status_page: &str) -> String {
        match self {
            SubmissionOutcome::Accepted { order_id, job_id } => format!(
                "{status_page}?ok=1&order_id={}&job_id={}",
                encode_component(order_id),
                encode_component(job_id)
            ),
            SubmissionOutcome::Failed { message } => {
                format!("{status_page}?ok=0&msg={}", encode_component(message))
            }
        }
    }
}

/// Marks `encodeURIComponent` leaves unescaped on top of the RFC 3986
/// unreserved set.
const UNESCAPED_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encodes a query value the way a browser's `encodeURIComponent`
/// does.
fn encode_component(value: &str) -> String {
    let mut encoded = urlencoding::encode(value).into_owned();
    for (escaped, mark) in UNESCAPED_MARKS {
        if encoded.contains(escaped) {
            encoded = encoded.replace(escaped, mark);
        }
    }
    encoded
}

/// Parses a response body; anything unparsable becomes an empty object.
#[must_use]
pub fn parse_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|e| {
        tracing::warn!("order response is not valid JSON ({e}); treating as empty");
        Value::Object(serde_json::Map::new())
    })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text of a truthy field, or `None` when the field is absent or falsy.
fn truthy_text(body: &Value, key: &str) -> Option<String> {
    body.get(key).filter(|value| is_truthy(value)).map(|value| match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    })
}

/// Classifies an HTTP response.
#[must_use]
pub fn interpret_response(response: &TransportResponse, i18n: &I18n) -> SubmissionOutcome {
    let body = parse_body(&response.body);
    let ok = body.get("ok").is_some_and(is_truthy);

    if response.is_success() && ok {
        return SubmissionOutcome::Accepted {
            order_id: truthy_text(&body, "order_id").unwrap_or_default(),
            job_id: truthy_text(&body, "job_id").unwrap_or_default(),
        };
    }

    let message = truthy_text(&body, "error")
        .or_else(|| truthy_text(&body, "message"))
        .unwrap_or_else(|| {
            i18n.tr_with_args(
                "submit-request-failed",
                &[("status", response.status.to_string())],
            )
        });
    SubmissionOutcome::Failed { message }
}

/// Classifies a failure that produced no HTTP response.
#[must_use]
pub fn interpret_error(error: &TransportError, i18n: &I18n) -> SubmissionOutcome {
    let message = match error.message() {
        "" => i18n.tr("submit-network-error"),
        text => text.to_string(),
    };
    SubmissionOutcome::Failed { message }
}

/// Classifies the result of a transport call.
#[must_use]
pub fn interpret(
    result: &Result<TransportResponse, TransportError>,
    i18n: &I18n,
) -> SubmissionOutcome {
    match result {
        Ok(response) => interpret_response(response, i18n),
        Err(error) => interpret_error(error, i18n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use pretty_assertions::assert_eq;

    const STATUS_PAGE: &str = "/order-status.html";

    fn i18n() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    fn route(status: u16, body: &str) -> String {
        interpret_response(&TransportResponse::new(status, body), &i18n())
            .redirect_location(STATUS_PAGE)
    }

    #[test]
    fn refused_order_redirects_with_encoded_error() {
        assert_eq!(
            route(200, r#"{"ok":false,"error":"Out of stock"}"#),
            "/order-status.html?ok=0&msg=Out%20of%20stock"
        );
    }

    #[test]
    fn accepted_order_redirects_with_ids() {
        assert_eq!(
            route(201, r#"{"ok":true,"order_id":"A1","job_id":"J9"}"#),
            "/order-status.html?ok=1&order_id=A1&job_id=J9"
        );
    }

    #[test]
    fn missing_ids_default_to_empty() {
        assert_eq!(
            route(200, r#"{"ok":1}"#),
            "/order-status.html?ok=1&order_id=&job_id="
        );
    }

    #[test]
    fn numeric_ids_are_stringified() {
        assert_eq!(
            route(200, r#"{"ok":true,"order_id":42,"job_id":null}"#),
            "/order-status.html?ok=1&order_id=42&job_id="
        );
    }

    #[test]
    fn message_is_used_when_error_is_absent_or_empty() {
        assert_eq!(
            route(400, r#"{"ok":false,"error":"","message":"Bad qty"}"#),
            "/order-status.html?ok=0&msg=Bad%20qty"
        );
    }

    #[test]
    fn malformed_body_reports_status_even_on_200() {
        assert_eq!(
            route(200, "<html>oops</html>"),
            "/order-status.html?ok=0&msg=Request%20failed%20(200)"
        );
    }

    #[test]
    fn http_failure_overrides_ok_flag() {
        assert_eq!(
            route(500, r#"{"ok":true}"#),
            "/order-status.html?ok=0&msg=Request%20failed%20(500)"
        );
    }

    #[test]
    fn non_object_json_counts_as_not_ok() {
        assert_eq!(
            route(200, "[1,2]"),
            "/order-status.html?ok=0&msg=Request%20failed%20(200)"
        );
    }

    #[test]
    fn network_error_uses_its_message() {
        let outcome =
            interpret_error(&TransportError::Network("connection refused".into()), &i18n());
        assert_eq!(
            outcome.redirect_location(STATUS_PAGE),
            "/order-status.html?ok=0&msg=connection%20refused"
        );
    }

    #[test]
    fn empty_network_error_falls_back_to_generic_text() {
        let outcome = interpret(&Err(TransportError::Network(String::new())), &i18n());
        assert_eq!(
            outcome,
            SubmissionOutcome::Failed {
                message: "Network error".to_string()
            }
        );
    }

    #[test]
    fn query_values_keep_browser_safe_marks() {
        assert_eq!(encode_component("Oops! (it's *bad*)"), "Oops!%20(it's%20*bad*)");
        assert_eq!(encode_component("50% off & more"), "50%25%20off%20%26%20more");
        assert_eq!(encode_component("%28"), "%2528");
    }

    #[test]
    fn truthiness_matches_loose_rules() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&serde_json::json!(0)));
        assert!(!is_truthy(&serde_json::json!("")));
        assert!(is_truthy(&serde_json::json!("0")));
        assert!(is_truthy(&serde_json::json!([])));
        assert!(is_truthy(&serde_json::json!({})));
    }
}
