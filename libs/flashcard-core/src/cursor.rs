//! Linear browse cursor over the deck's natural order.

use crate::store::DeckStore;
use crate::types::Card;

/// Current browse position. Always `0` for an empty deck.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowseCursor {
    index: usize,
}

impl BrowseCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Card under the cursor, or `None` when the deck is empty.
    pub fn current<'a>(&self, store: &'a DeckStore) -> Option<&'a Card> {
        store.get(self.index)
    }

    /// Advance by one, wrapping from the last card to the first.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            self.index = 0;
            return;
        }
        self.index = (self.index + 1) % len;
    }

    /// Retreat by one, wrapping from the first card to the last.
    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            self.index = 0;
            return;
        }
        self.index = (self.index + len - 1) % len;
    }

    /// Select a position directly, clamped into the deck.
    pub fn jump_to(&mut self, index: usize, len: usize) {
        self.index = index.min(len.saturating_sub(1));
    }

    /// Point at the newest card.
    pub fn on_created(&mut self, new_len: usize) {
        self.index = new_len.saturating_sub(1);
    }

    /// Recompute after the card at `removed` was deleted.
    ///
    /// Removing a card below the cursor shifts it down so the same card
    /// stays selected.
    pub fn on_removed(&mut self, removed: usize, new_len: usize) {
        if removed < self.index {
            self.index -= 1;
        }
        self.index = self.index.min(new_len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn next_wraps_to_first() {
        let mut cursor = BrowseCursor::new();
        cursor.jump_to(2, 3);
        cursor.next(3);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn prev_wraps_to_last() {
        let mut cursor = BrowseCursor::new();
        cursor.prev(4);
        assert_eq!(cursor.index(), 3);
    }

    #[test]
    fn navigation_on_empty_deck_stays_at_zero() {
        let mut cursor = BrowseCursor::new();
        cursor.next(0);
        cursor.prev(0);
        assert_eq!(cursor.index(), 0);
        assert!(cursor.current(&DeckStore::new()).is_none());
    }

    #[test]
    fn jump_clamps_into_range() {
        let mut cursor = BrowseCursor::new();
        cursor.jump_to(10, 3);
        assert_eq!(cursor.index(), 2);
        cursor.jump_to(5, 0);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn removing_lower_card_keeps_selection() {
        let mut cursor = BrowseCursor::new();
        cursor.jump_to(3, 5);
        cursor.on_removed(1, 4);
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn removing_last_card_empties_cursor() {
        let mut cursor = BrowseCursor::new();
        cursor.on_removed(0, 0);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn creation_jumps_to_newest() {
        let mut cursor = BrowseCursor::new();
        cursor.on_created(6);
        assert_eq!(cursor.index(), 5);
    }

    proptest! {
        #[test]
        fn next_len_times_is_closure(len in 1usize..64, start in 0usize..64) {
            let mut cursor = BrowseCursor::new();
            cursor.jump_to(start, len);
            let before = cursor.index();
            for _ in 0..len {
                cursor.next(len);
            }
            prop_assert_eq!(cursor.index(), before);
        }

        #[test]
        fn prev_then_next_is_identity(len in 1usize..64, start in 0usize..64) {
            let mut cursor = BrowseCursor::new();
            cursor.jump_to(start, len);
            let before = cursor.index();
            cursor.prev(len);
            cursor.next(len);
            prop_assert_eq!(cursor.index(), before);
            cursor.next(len);
            cursor.prev(len);
            prop_assert_eq!(cursor.index(), before);
        }

        #[test]
        fn deleting_at_cursor_clamps(n in 1usize..64, k in 0usize..64) {
            let k = k % n;
            let mut cursor = BrowseCursor::new();
            cursor.jump_to(k, n);
            cursor.on_removed(k, n - 1);
            let expected = if n - 1 > 0 { k.min(n - 2) } else { 0 };
            prop_assert_eq!(cursor.index(), expected);
        }
    }
}
