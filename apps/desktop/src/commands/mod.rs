//! Commands exposed to the frontend.
//!
//! Each command locks the deck for the duration of one intent and returns
//! the resulting view. [`dispatch_json`] is the entry point for a webview
//! bridge passing intents as JSON.

pub mod deck;
pub mod study;

pub use deck::{
    browse_next, browse_prev, create_card, delete_card, flip, get_view, select_card, update_card,
    CardForm,
};
pub use study::{enter_study, exit_study, study_flip, study_next, study_prev, study_reshuffle};

use crate::state::AppState;
use flashcard_core::{CardId, DeckError, View};
use serde::{Deserialize, Serialize};

/// Error category reported to the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    NotFound,
    BadRequest,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandError {
    pub kind: ErrorKind,
    pub message: String,
}

impl CommandError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Internal,
            message: message.into(),
        }
    }
}

impl From<DeckError> for CommandError {
    fn from(e: DeckError) -> Self {
        let kind = match e {
            DeckError::Validation(_) => ErrorKind::Validation,
            DeckError::NotFound(_) => ErrorKind::NotFound,
            DeckError::IdsExhausted => ErrorKind::Internal,
        };
        Self {
            kind,
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(e: serde_json::Error) -> Self {
        Self {
            kind: ErrorKind::BadRequest,
            message: e.to_string(),
        }
    }
}

/// A user intent as sent by the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    GetView,
    Flip,
    BrowseNext,
    BrowsePrev,
    SelectCard { card_id: CardId },
    CreateCard { front: String, back: String },
    UpdateCard { card_id: CardId, front: String, back: String },
    DeleteCard { card_id: CardId },
    EnterStudy,
    ExitStudy,
    StudyNext,
    StudyPrev,
    StudyReshuffle,
    StudyFlip,
}

/// Route an intent to its command.
pub fn dispatch(state: &AppState, intent: Intent) -> Result<View, CommandError> {
    tracing::debug!(?intent, "dispatching intent");
    match intent {
        Intent::GetView => get_view(state),
        Intent::Flip => flip(state),
        Intent::BrowseNext => browse_next(state),
        Intent::BrowsePrev => browse_prev(state),
        Intent::SelectCard { card_id } => select_card(card_id, state),
        Intent::CreateCard { front, back } => create_card(CardForm { front, back }, state),
        Intent::UpdateCard {
            card_id,
            front,
            back,
        } => update_card(card_id, CardForm { front, back }, state),
        Intent::DeleteCard { card_id } => delete_card(card_id, state),
        Intent::EnterStudy => enter_study(state),
        Intent::ExitStudy => exit_study(state),
        Intent::StudyNext => study_next(state),
        Intent::StudyPrev => study_prev(state),
        Intent::StudyReshuffle => study_reshuffle(state),
        Intent::StudyFlip => study_flip(state),
    }
}

/// Parse a JSON intent, run it, and serialize the resulting view.
pub fn dispatch_json(state: &AppState, payload: &str) -> Result<String, CommandError> {
    let intent: Intent = serde_json::from_str(payload)?;
    let view = dispatch(state, intent)?;
    Ok(serde_json::to_string(&view)?)
}
