// SPDX-License-Identifier: MPL-2.0
//! Order forms: required-field validation and asynchronous submission.
//!
//! Two forms exist ([`FormKind::Quick`] and [`FormKind::Large`]); each gets
//! its own [`OrderForm`] and submits independently of the other.
//!
//! [`FormKind::Quick`]: crate::domain::order::FormKind::Quick
//! [`FormKind::Large`]: crate::domain::order::FormKind::Large

pub mod controller;
pub mod outcome;
pub mod payload;
pub mod validation;

pub use controller::{OrderForm, OrderFormSettings, SubmitReport, SubmitStep};
pub use outcome::SubmissionOutcome;
pub use payload::{build_payload, items_json};
pub use validation::{validate, ValidationReport};

use std::cell::RefCell;
use std::rc::Rc;

use crate::application::port::{Navigator, OrderFormView, OrderTransport};

/// Shared handle to an order form.
pub type SharedOrderForm<V> = Rc<RefCell<OrderForm<V>>>;

/// Submits a shared form without holding its borrow across the request.
///
/// While the request is pending other handlers may borrow the form; a second
/// submit started in that window reports [`SubmitReport::Busy`].
pub async fn submit_shared<V, T, N>(
    form: &SharedOrderForm<V>,
    transport: &T,
    navigator: &mut N,
) -> SubmitReport
where
    V: OrderFormView,
    T: OrderTransport,
    N: Navigator + ?Sized,
{
    let (payload, endpoint) = {
        let mut form = form.borrow_mut();
        match form.begin_submit() {
            SubmitStep::Busy => return SubmitReport::Busy,
            SubmitStep::Invalid(errors) => return SubmitReport::Invalid(errors),
            SubmitStep::Send(payload) => (payload, form.settings().endpoint.clone()),
        }
    };

    let result = match payload {
        Ok(payload) => transport.post_order(&endpoint, &payload).await,
        Err(error) => Err(error),
    };

    let (outcome, location) = form.borrow_mut().complete_submit(result, navigator);
    SubmitReport::Redirected { outcome, location }
}
