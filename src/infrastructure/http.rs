// SPDX-License-Identifier: MPL-2.0
//! `reqwest` implementation of the order transport.

use reqwest::multipart::{Form, Part};

use crate::application::port::{OrderTransport, TransportError, TransportResponse};
use crate::domain::order::{FieldValue, OrderPayload};
use crate::error::Result;

/// Posts order payloads as `multipart/form-data` to a backend.
#[derive(Debug, Clone)]
pub struct HttpOrderTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpOrderTransport {
    /// Creates a transport for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (TLS backend
    /// initialization failure).
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("CrownStorefront/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Absolute URL for `endpoint`.
    #[must_use]
    pub fn url_for(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return endpoint.to_string();
        }
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }
}

/// Converts the payload into a multipart form, keeping entry order.
fn build_form(payload: &OrderPayload) -> std::result::Result<Form, TransportError> {
    let mut form = Form::new();
    for field in payload.fields() {
        form = match &field.value {
            FieldValue::Text(text) => form.text(field.name.clone(), text.clone()),
            FieldValue::File(attachment) => {
                let mut part =
                    Part::bytes(attachment.bytes.clone()).file_name(attachment.file_name.clone());
                if let Some(content_type) = &attachment.content_type {
                    part = part
                        .mime_str(content_type)
                        .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
                }
                form.part(field.name.clone(), part)
            }
        };
    }
    Ok(form)
}

impl OrderTransport for HttpOrderTransport {
    async fn post_order(
        &self,
        endpoint: &str,
        payload: &OrderPayload,
    ) -> std::result::Result<TransportResponse, TransportError> {
        let url = self.url_for(endpoint);
        let form = build_form(payload)?;
        tracing::debug!(%url, entries = payload.fields().len(), "posting order");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        // An unreadable body is handled like an unparsable one.
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(status, "failed to read response body: {e}");
                String::new()
            }
        };
        Ok(TransportResponse::new(status, body))
    }
}
