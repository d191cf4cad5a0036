// SPDX-License-Identifier: MPL-2.0
//! Repeating timer port.

use std::time::Duration;

/// Handle of a running interval timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// Source of repeating timers.
///
/// The host delivers each firing back to the owning controller together with
/// the [`TimerId`] it was started under.
pub trait Scheduler {
    /// Starts a timer firing every `period`.
    fn start_interval(&mut self, period: Duration) -> TimerId;

    /// Stops a timer. Cancelling an unknown or finished timer is a no-op.
    fn cancel_interval(&mut self, id: TimerId);
}
