//! Ordered card collection with id-based identity.

use crate::error::{DeckError, Field, Result};
use crate::types::{Card, CardId};

/// Monotonic id source. Never hands out the same id twice.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    /// `None` once `i64::MAX` has been handed out or loaded.
    next: Option<i64>,
}

impl IdGenerator {
    /// Generator whose first id is strictly greater than every id in `cards`.
    pub fn after(cards: &[Card]) -> Self {
        let max = cards.iter().map(|c| c.id.value()).max().unwrap_or(0);
        Self {
            next: max.checked_add(1).map(|next| next.max(1)),
        }
    }

    pub fn next_id(&mut self) -> Result<CardId> {
        let value = self.next.ok_or(DeckError::IdsExhausted)?;
        self.next = value.checked_add(1);
        Ok(CardId::new(value))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self { next: Some(1) }
    }
}

/// Owns every card; browse order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct DeckStore {
    cards: Vec<Card>,
    ids: IdGenerator,
}

impl DeckStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from previously persisted cards.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let ids = IdGenerator::after(&cards);
        Self { cards, ids }
    }

    /// Append a new card and return it.
    pub fn create_card(&mut self, front: &str, back: &str) -> Result<Card> {
        let (front, back) = validate(front, back)?;
        let card = Card {
            id: self.ids.next_id()?,
            front,
            back,
        };
        self.cards.push(card.clone());
        Ok(card)
    }

    /// Replace the text of an existing card, keeping its id and position.
    pub fn update_card(&mut self, id: CardId, front: &str, back: &str) -> Result<()> {
        let (front, back) = validate(front, back)?;
        let card = self
            .cards
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(DeckError::NotFound(id))?;
        card.front = front;
        card.back = back;
        Ok(())
    }

    /// Remove a card. Returns the position it occupied.
    pub fn delete_card(&mut self, id: CardId) -> Result<usize> {
        let position = self.position_of(id).ok_or(DeckError::NotFound(id))?;
        self.cards.remove(position);
        Ok(position)
    }

    pub fn find_by_id(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn position_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    pub fn list(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

fn validate(front: &str, back: &str) -> Result<(String, String)> {
    let front = front.trim();
    if front.is_empty() {
        return Err(DeckError::Validation(Field::Front));
    }
    let back = back.trim();
    if back.is_empty() {
        return Err(DeckError::Validation(Field::Back));
    }
    Ok((front.to_string(), back.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn store_with(n: usize) -> DeckStore {
        let mut store = DeckStore::new();
        for i in 0..n {
            store.create_card(&format!("Q{i}"), &format!("A{i}")).unwrap();
        }
        store
    }

    #[test]
    fn create_appends_trimmed_card() {
        let mut store = store_with(1);
        let card = store.create_card("  What?  ", "\tThat.\n").unwrap();
        assert_eq!(card.front, "What?");
        assert_eq!(card.back, "That.");
        assert_eq!(store.list().last(), Some(&card));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn create_rejects_blank_fields() {
        let mut store = DeckStore::new();
        assert_eq!(
            store.create_card("   ", "A"),
            Err(DeckError::Validation(Field::Front))
        );
        assert_eq!(
            store.create_card("Q", ""),
            Err(DeckError::Validation(Field::Back))
        );
        assert!(store.is_empty());
    }

    #[test]
    fn rapid_creation_yields_distinct_ids() {
        let store = store_with(1000);
        let ids: HashSet<_> = store.list().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn from_cards_never_reuses_loaded_ids() {
        let mut store = DeckStore::from_cards(vec![
            Card { id: CardId::new(7), front: "a".into(), back: "b".into() },
            Card { id: CardId::new(1_718_000_000_000), front: "c".into(), back: "d".into() },
        ]);
        let card = store.create_card("e", "f").unwrap();
        assert_eq!(card.id, CardId::new(1_718_000_000_001));
    }

    #[test]
    fn exhausted_ids_fail_without_mutation() {
        let mut store = DeckStore::from_cards(vec![Card {
            id: CardId::new(i64::MAX),
            front: "Q".into(),
            back: "A".into(),
        }]);
        assert_eq!(store.create_card("N", "B"), Err(DeckError::IdsExhausted));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn last_id_is_handed_out_once() {
        let mut store = DeckStore::from_cards(vec![Card {
            id: CardId::new(i64::MAX - 1),
            front: "Q".into(),
            back: "A".into(),
        }]);
        let card = store.create_card("N", "B").unwrap();
        assert_eq!(card.id, CardId::new(i64::MAX));
        assert_eq!(store.create_card("M", "C"), Err(DeckError::IdsExhausted));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn update_keeps_id_and_position() {
        let mut store = store_with(3);
        let id = store.list()[1].id;
        store.update_card(id, "new front", "new back").unwrap();
        assert_eq!(store.position_of(id), Some(1));
        let card = store.find_by_id(id).unwrap();
        assert_eq!(card.front, "new front");
        assert_eq!(card.back, "new back");
    }

    #[test]
    fn update_rejects_invalid_without_mutation() {
        let mut store = store_with(1);
        let id = store.list()[0].id;
        assert_eq!(
            store.update_card(id, "", "x"),
            Err(DeckError::Validation(Field::Front))
        );
        assert_eq!(store.list()[0].front, "Q0");

        let missing = CardId::new(999);
        assert_eq!(
            store.update_card(missing, "x", "y"),
            Err(DeckError::NotFound(missing))
        );
    }

    #[test]
    fn delete_preserves_relative_order() {
        let mut store = store_with(4);
        let id = store.list()[1].id;
        assert_eq!(store.delete_card(id), Ok(1));
        let fronts: Vec<_> = store.list().iter().map(|c| c.front.as_str()).collect();
        assert_eq!(fronts, vec!["Q0", "Q2", "Q3"]);
        assert_eq!(store.delete_card(id), Err(DeckError::NotFound(id)));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = store_with(2);
        let last = store.list()[1].id;
        store.delete_card(last).unwrap();
        let card = store.create_card("x", "y").unwrap();
        assert!(card.id > last);
    }
}
