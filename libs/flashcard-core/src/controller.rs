//! Deck controller: the single owner of all study state.
//!
//! Every intent runs to completion and returns the resulting [`View`].
//! Failed intents leave the deck, cursor, session and face untouched.

use crate::cursor::BrowseCursor;
use crate::error::{DeckError, Result};
use crate::persistence::{KeyValueStore, Persistence};
use crate::store::DeckStore;
use crate::study::StudySession;
use crate::types::{Card, CardId, DeckSnapshot, Face, StudyProgress, View};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deck, browse cursor, study session and flip state for one app session.
#[derive(Debug)]
pub struct StudyDeck<K, R = StdRng> {
    store: DeckStore,
    cursor: BrowseCursor,
    session: StudySession,
    face: Face,
    persistence: Persistence<K>,
    rng: R,
}

impl<K: KeyValueStore> StudyDeck<K, StdRng> {
    /// Load the stored deck, shuffling study order from OS entropy.
    pub fn open(persistence: Persistence<K>) -> Self {
        Self::open_with_rng(persistence, StdRng::from_entropy())
    }
}

impl<K: KeyValueStore, R: Rng> StudyDeck<K, R> {
    pub fn open_with_rng(persistence: Persistence<K>, rng: R) -> Self {
        let snapshot = persistence.load();
        tracing::info!(cards = snapshot.cards.len(), "deck loaded");
        Self {
            store: DeckStore::from_cards(snapshot.cards),
            cursor: BrowseCursor::new(),
            session: StudySession::new(),
            face: Face::Front,
            persistence,
            rng,
        }
    }

    pub fn store(&self) -> &DeckStore {
        &self.store
    }

    pub fn cursor(&self) -> &BrowseCursor {
        &self.cursor
    }

    pub fn session(&self) -> &StudySession {
        &self.session
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn persistence(&self) -> &Persistence<K> {
        &self.persistence
    }

    pub fn snapshot(&self) -> DeckSnapshot {
        DeckSnapshot::new(self.store.list().to_vec())
    }

    /// Card currently shown: the study card while studying, else the browse card.
    pub fn displayed_card(&self) -> Option<&Card> {
        if self.session.is_active() {
            self.session
                .current_position()
                .and_then(|position| self.store.get(position))
        } else {
            self.cursor.current(&self.store)
        }
    }

    pub fn view(&self) -> View {
        let study_progress = self.session.is_active().then(|| StudyProgress {
            index: self.session.index(),
            total: self.session.order().len(),
        });
        View {
            displayed_card: self.displayed_card().cloned(),
            displayed_face: self.face,
            is_study_active: self.session.is_active(),
            list_snapshot: self.store.list().to_vec(),
            browse_index: self.cursor.index(),
            study_progress,
        }
    }

    pub fn flip(&mut self) -> View {
        if self.displayed_card().is_some() {
            self.face = self.face.flipped();
        }
        self.view()
    }

    pub fn browse_next(&mut self) -> View {
        self.leave_study();
        self.cursor.next(self.store.len());
        self.show_front()
    }

    pub fn browse_prev(&mut self) -> View {
        self.leave_study();
        self.cursor.prev(self.store.len());
        self.show_front()
    }

    /// Jump the browse cursor to a card picked from the list.
    pub fn select_card(&mut self, id: CardId) -> Result<View> {
        let position = self.store.position_of(id).ok_or(DeckError::NotFound(id))?;
        self.leave_study();
        self.cursor.jump_to(position, self.store.len());
        Ok(self.show_front())
    }

    pub fn create_card(&mut self, front: &str, back: &str) -> Result<View> {
        let card = self.store.create_card(front, back)?;
        tracing::debug!(id = %card.id, "card created");
        self.cursor.on_created(self.store.len());
        self.leave_study();
        self.persist();
        Ok(self.show_front())
    }

    pub fn update_card(&mut self, id: CardId, front: &str, back: &str) -> Result<View> {
        self.store.update_card(id, front, back)?;
        tracing::debug!(%id, "card updated");
        self.persist();
        Ok(self.show_front())
    }

    /// Delete a card. Confirmation is the caller's job.
    pub fn delete_card(&mut self, id: CardId) -> Result<View> {
        let position = self.store.delete_card(id)?;
        tracing::debug!(%id, position, "card deleted");
        self.cursor.on_removed(position, self.store.len());
        self.leave_study();
        self.persist();
        Ok(self.show_front())
    }

    pub fn enter_study(&mut self) -> View {
        self.session.enter(self.store.len(), &mut self.rng);
        self.show_front()
    }

    pub fn exit_study(&mut self) -> View {
        self.session.exit();
        self.show_front()
    }

    pub fn study_next(&mut self) -> View {
        self.session.advance(1);
        self.show_front()
    }

    pub fn study_prev(&mut self) -> View {
        self.session.advance(-1);
        self.show_front()
    }

    pub fn study_reshuffle(&mut self) -> View {
        self.session.reshuffle(&mut self.rng);
        self.show_front()
    }

    pub fn study_flip(&mut self) -> View {
        if !self.session.is_active() {
            return self.view();
        }
        self.flip()
    }

    fn show_front(&mut self) -> View {
        self.face = Face::Front;
        self.view()
    }

    // Positions held by the session are stale once the deck changes.
    fn leave_study(&mut self) {
        if self.session.is_active() {
            tracing::debug!("leaving study session");
            self.session.exit();
        }
    }

    fn persist(&mut self) {
        let snapshot = self.snapshot();
        if let Err(e) = self.persistence.save(&snapshot) {
            tracing::warn!(error = %e, "failed to save deck snapshot");
        }
    }
}
