// SPDX-License-Identifier: MPL-2.0
//! Lifecycle of a single submission attempt.

/// Where an order form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    /// Waiting for the user.
    #[default]
    Idle,
    /// Checking required fields and item rows.
    Validating,
    /// Request in flight; further submits are rejected.
    Submitting,
    /// The attempt concluded and the page was redirected.
    Done,
}

impl SubmissionPhase {
    /// Returns `true` if a new submit may start from this phase.
    #[must_use]
    pub fn accepts_submit(self) -> bool {
        matches!(self, SubmissionPhase::Idle | SubmissionPhase::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_settled_phases_accept_submit() {
        assert!(SubmissionPhase::Idle.accepts_submit());
        assert!(SubmissionPhase::Done.accepts_submit());
        assert!(!SubmissionPhase::Validating.accepts_submit());
        assert!(!SubmissionPhase::Submitting.accepts_submit());
    }
}
