//! Study session commands.

use super::CommandError;
use crate::state::AppState;
use flashcard_core::View;

/// Start a shuffled pass over the whole deck.
pub fn enter_study(state: &AppState) -> Result<View, CommandError> {
    Ok(state.deck()?.enter_study())
}

pub fn exit_study(state: &AppState) -> Result<View, CommandError> {
    Ok(state.deck()?.exit_study())
}

pub fn study_next(state: &AppState) -> Result<View, CommandError> {
    Ok(state.deck()?.study_next())
}

pub fn study_prev(state: &AppState) -> Result<View, CommandError> {
    Ok(state.deck()?.study_prev())
}

pub fn study_reshuffle(state: &AppState) -> Result<View, CommandError> {
    Ok(state.deck()?.study_reshuffle())
}

pub fn study_flip(state: &AppState) -> Result<View, CommandError> {
    Ok(state.deck()?.study_flip())
}
