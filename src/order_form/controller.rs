// SPDX-License-Identifier: MPL-2.0
//! Order form controller: validation, submission and redirect.
//!
//! A submission is split into [`OrderForm::begin_submit`] and
//! [`OrderForm::complete_submit`] so a host sharing the form behind a
//! `RefCell` can release it while the request is in flight. The phase stays
//! `Submitting` in between, which is what rejects a second submit of the
//! same form.

use std::rc::Rc;

use crate::application::port::{
    Navigator, OrderFormView, OrderTransport, TransportError, TransportResponse,
};
use crate::config::Config;
use crate::domain::order::{FormKind, OrderPayload, SubmissionPhase};
use crate::i18n::I18n;

use super::outcome::{self, SubmissionOutcome};
use super::payload::build_payload;
use super::validation::validate;

/// Where submissions go and where the browser lands afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFormSettings {
    pub endpoint: String,
    pub status_page: String,
}

impl OrderFormSettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            endpoint: config.orders.endpoint.clone(),
            status_page: config.orders.status_page.clone(),
        }
    }
}

impl Default for OrderFormSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// First half of a submission.
#[derive(Debug)]
pub enum SubmitStep {
    /// A submission of this form is already in flight.
    Busy,
    /// Required fields or item rows are missing; nothing is sent.
    Invalid(Vec<String>),
    /// Validation passed and the submit control is locked. The payload (or
    /// the reason it could not be built) must be handed to
    /// [`OrderForm::complete_submit`].
    Send(Result<OrderPayload, TransportError>),
}

/// Result of a full submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReport {
    Busy,
    Invalid(Vec<String>),
    /// The attempt concluded and the navigator was sent to `location`.
    Redirected {
        outcome: SubmissionOutcome,
        location: String,
    },
}

/// Controller of one order form.
pub struct OrderForm<V> {
    kind: FormKind,
    view: V,
    phase: SubmissionPhase,
    settings: OrderFormSettings,
    i18n: Rc<I18n>,
    saved_label: Option<String>,
}

impl<V: OrderFormView> OrderForm<V> {
    pub fn new(kind: FormKind, view: V, settings: OrderFormSettings, i18n: Rc<I18n>) -> Self {
        Self {
            kind,
            view,
            phase: SubmissionPhase::Idle,
            settings,
            i18n,
            saved_label: None,
        }
    }

    /// Validates and, on success, locks the submit control and builds the
    /// payload.
    pub fn begin_submit(&mut self) -> SubmitStep {
        if !self.phase.accepts_submit() {
            tracing::debug!(form = %self.kind, "submit ignored; request already in flight");
            return SubmitStep::Busy;
        }

        self.phase = SubmissionPhase::Validating;
        let report = validate(&mut self.view, &self.i18n);
        if !report.is_valid() {
            self.phase = SubmissionPhase::Idle;
            return SubmitStep::Invalid(report.into_errors());
        }

        self.phase = SubmissionPhase::Submitting;
        self.lock_submit_button();

        let payload = build_payload(self.kind, self.view.fields(), &self.view.item_rows())
            .map_err(|e| TransportError::InvalidRequest(e.to_string()));
        SubmitStep::Send(payload)
    }

    /// Routes the transport result, resets the form on success and restores
    /// the submit control.
    ///
    /// Returns the location the navigator was sent to.
    pub fn complete_submit<N>(
        &mut self,
        result: Result<TransportResponse, TransportError>,
        navigator: &mut N,
    ) -> (SubmissionOutcome, String)
    where
        N: Navigator + ?Sized,
    {
        let outcome = outcome::interpret(&result, &self.i18n);
        match &result {
            Ok(response) => {
                tracing::info!(
                    form = %self.kind,
                    status = response.status,
                    accepted = outcome.is_accepted(),
                    "order response received"
                );
            }
            Err(error) => tracing::warn!(form = %self.kind, "order submission failed: {error}"),
        }

        if outcome.is_accepted() {
            self.view.reset();
        }

        let location = outcome.redirect_location(&self.settings.status_page);
        tracing::info!(%location, "redirecting");
        navigator.redirect(&location);

        self.unlock_submit_button();
        self.phase = SubmissionPhase::Done;
        (outcome, location)
    }

    /// Runs a complete submission against `transport`.
    pub async fn submit<T, N>(&mut self, transport: &T, navigator: &mut N) -> SubmitReport
    where
        T: OrderTransport,
        N: Navigator + ?Sized,
    {
        let payload = match self.begin_submit() {
            SubmitStep::Busy => return SubmitReport::Busy,
            SubmitStep::Invalid(errors) => return SubmitReport::Invalid(errors),
            SubmitStep::Send(payload) => payload,
        };
        tracing::info!(
            form = %self.kind,
            endpoint = %self.settings.endpoint,
            "submitting order"
        );

        let result = match payload {
            Ok(payload) => transport.post_order(&self.settings.endpoint, &payload).await,
            Err(error) => Err(error),
        };
        let (outcome, location) = self.complete_submit(result, navigator);
        SubmitReport::Redirected { outcome, location }
    }

    fn lock_submit_button(&mut self) {
        let in_progress = self.i18n.tr("submit-in-progress");
        match self.view.submit_button() {
            Some(button) => {
                self.saved_label = Some(button.label());
                button.set_disabled(true);
                button.set_label(&in_progress);
            }
            None => tracing::debug!(form = %self.kind, "form has no submit control"),
        }
    }

    fn unlock_submit_button(&mut self) {
        let saved = self.saved_label.take();
        if let Some(button) = self.view.submit_button() {
            button.set_disabled(false);
            if let Some(label) = saved {
                button.set_label(&label);
            }
        }
    }

    #[must_use]
    pub fn kind(&self) -> FormKind {
        self.kind
    }

    #[must_use]
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    #[must_use]
    pub fn settings(&self) -> &OrderFormSettings {
        &self.settings
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}

impl<V> std::fmt::Debug for OrderForm<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderForm")
            .field("kind", &self.kind)
            .field("phase", &self.phase)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
