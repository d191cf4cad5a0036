// SPDX-License-Identifier: MPL-2.0
//! Handler registration against an abstract UI event source.
//!
//! The host owns an [`EventSource`] per kind of page event and forwards what
//! the browser reports (clicks, key presses, visibility changes, timer
//! firings). Controllers subscribe handlers; dropping interest is done by
//! unsubscribing with the returned [`Subscription`].

use std::fmt;

/// Token identifying a registered handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Handler<E> = Box<dyn FnMut(&E)>;

/// Fan-out of events to registered handlers, in registration order.
pub struct EventSource<E> {
    next_id: u64,
    handlers: Vec<(Subscription, Handler<E>)>,
}

impl<E> EventSource<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 0,
            handlers: Vec::new(),
        }
    }

    /// Registers `handler` and returns the token that unregisters it.
    pub fn subscribe(&mut self, handler: impl FnMut(&E) + 'static) -> Subscription {
        let subscription = Subscription(self.next_id);
        self.next_id += 1;
        self.handlers.push((subscription, Box::new(handler)));
        subscription
    }

    /// Unregisters a handler. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(id, _)| *id != subscription);
        self.handlers.len() != before
    }

    /// Delivers `event` to every handler and returns how many ran.
    pub fn emit(&mut self, event: &E) -> usize {
        for (_, handler) in &mut self.handlers {
            handler(event);
        }
        self.handlers.len()
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<E> Default for EventSource<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for EventSource<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventSource")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
