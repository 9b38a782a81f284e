//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;
use crate::round::{Action, Phase};

/// Reasons a wager is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BetError {
    /// The bet input is not a whole number.
    #[error("bet amount is not a number")]
    NotANumber,
    /// The bet is zero or negative.
    #[error("bet amount must be at least 1")]
    NotPositive,
    /// The bet exceeds the available cash.
    #[error("bet exceeds available cash of {cash}")]
    InsufficientFunds {
        /// Cash available when the bet was rejected.
        cash: usize,
    },
}

/// A draw was attempted on an empty deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct DeckExhausted;

/// A stacked deck contained the same card twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("duplicate card in deck: {0}")]
pub struct DuplicateCard(pub Card);

/// Stored round state that no sequence of actions can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("inconsistent round state: {0}")]
pub struct InvalidRoundState(pub &'static str);

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The wager was rejected; no round was created.
    #[error("invalid bet: {0}")]
    InvalidBet(#[from] BetError),
    /// The action is not valid in the current phase.
    #[error("cannot {action} during {phase}")]
    IllegalAction {
        /// The rejected action.
        action: Action,
        /// The phase the round was in.
        phase: Phase,
    },
    /// The deck ran out of cards.
    #[error("no cards left in the deck")]
    DeckExhausted,
}

impl From<DeckExhausted> for RoundError {
    fn from(_: DeckExhausted) -> Self {
        Self::DeckExhausted
    }
}

/// Errors that can occur during a player session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The player name is empty.
    #[error("player name is empty")]
    EmptyName,
    /// No round is in progress.
    #[error("no round in progress")]
    NoRound,
    /// The current round has not been settled yet.
    #[error("round is still in progress")]
    RoundInProgress,
    /// The player has no cash left.
    #[error("player is out of cash")]
    Broke,
    /// The round rejected the operation.
    #[error(transparent)]
    Round(#[from] RoundError),
}

impl From<BetError> for SessionError {
    fn from(err: BetError) -> Self {
        Self::Round(RoundError::InvalidBet(err))
    }
}
