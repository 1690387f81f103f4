//! Browse and card-editing commands.

use super::CommandError;
use crate::state::AppState;
use flashcard_core::{CardId, View};

/// Front/back text submitted from the card modal.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CardForm {
    pub front: String,
    pub back: String,
}

/// Current view without changing anything.
pub fn get_view(state: &AppState) -> Result<View, CommandError> {
    Ok(state.deck()?.view())
}

pub fn flip(state: &AppState) -> Result<View, CommandError> {
    Ok(state.deck()?.flip())
}

pub fn browse_next(state: &AppState) -> Result<View, CommandError> {
    Ok(state.deck()?.browse_next())
}

pub fn browse_prev(state: &AppState) -> Result<View, CommandError> {
    Ok(state.deck()?.browse_prev())
}

/// Show a card picked from the card list.
pub fn select_card(card_id: CardId, state: &AppState) -> Result<View, CommandError> {
    state.deck()?.select_card(card_id).map_err(Into::into)
}

pub fn create_card(form: CardForm, state: &AppState) -> Result<View, CommandError> {
    state
        .deck()?
        .create_card(&form.front, &form.back)
        .map_err(Into::into)
}

pub fn update_card(card_id: CardId, form: CardForm, state: &AppState) -> Result<View, CommandError> {
    state
        .deck()?
        .update_card(card_id, &form.front, &form.back)
        .map_err(Into::into)
}

/// Delete a card. The frontend asks for confirmation before calling this.
pub fn delete_card(card_id: CardId, state: &AppState) -> Result<View, CommandError> {
    state.deck()?.delete_card(card_id).map_err(Into::into)
}
