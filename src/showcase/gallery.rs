// SPDX-License-Identifier: MPL-2.0
//! Lazy-loading state of the thumbnail gallery.
//!
//! Each placeholder starts `Deferred` and moves to `Loaded` the first time
//! it is reported near the viewport. The transition happens at most once.

/// Load state of one thumbnail placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Source held back in the deferred attribute.
    Deferred,
    /// Source promoted; the image is fetching or fetched.
    Loaded,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LazyGallery {
    states: Vec<LoadState>,
}

impl LazyGallery {
    /// Creates `len` deferred placeholders.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            states: vec![LoadState::Deferred; len],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<LoadState> {
        self.states.get(index).copied()
    }

    /// Marks placeholder `index` loaded.
    ///
    /// Returns `true` only on the deferred → loaded transition; unknown
    /// indices and already-loaded placeholders return `false`.
    pub fn promote(&mut self, index: usize) -> bool {
        match self.states.get_mut(index) {
            Some(state) if *state == LoadState::Deferred => {
                *state = LoadState::Loaded;
                true
            }
            _ => false,
        }
    }

    /// Number of placeholders still waiting for the viewport.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.states
            .iter()
            .filter(|state| **state == LoadState::Deferred)
            .count()
    }
}
