//! Randomized study traversal.
//!
//! A session holds deck positions only, never cards. It is built from the
//! card count at entry and must be exited or rebuilt when the deck length
//! changes underneath it.

use rand::Rng;

/// In-place Fisher–Yates shuffle.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Study mode state: a permutation of deck positions and a cursor into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudySession {
    active: bool,
    order: Vec<usize>,
    index: usize,
}

impl StudySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Start a session over `card_count` positions, tearing down any
    /// session already running.
    pub fn enter<R: Rng + ?Sized>(&mut self, card_count: usize, rng: &mut R) {
        self.exit();
        self.order = (0..card_count).collect();
        fisher_yates(&mut self.order, rng);
        self.index = 0;
        self.active = true;
        tracing::debug!(card_count, "study session entered");
    }

    pub fn exit(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.order.clear();
        self.index = 0;
        tracing::debug!("study session exited");
    }

    /// Move by `delta` with wraparound.
    pub fn advance(&mut self, delta: isize) {
        if !self.active || self.order.is_empty() {
            return;
        }
        let len = self.order.len() as isize;
        self.index = (self.index as isize + delta).rem_euclid(len) as usize;
    }

    /// Re-permute the current order and restart from its first entry.
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if !self.active {
            return;
        }
        fisher_yates(&mut self.order, rng);
        self.index = 0;
    }

    /// Deck position currently being studied.
    pub fn current_position(&self) -> Option<usize> {
        if !self.active {
            return None;
        }
        self.order.get(self.index).copied()
    }
}
