//! Round phase and action types.

use core::fmt;

/// Phase of a round.
///
/// A round is created by an accepted bet and leaves `Dealing` before the
/// constructor returns; callers observe `PlayerTurn`, `DealerTurn`,
/// `Comparing`, or `Settled`. `AwaitingBet` is the session's phase while no
/// round exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// No round yet; waiting for a wager.
    AwaitingBet,
    /// Initial two cards each are being dealt.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// The dealer draws while below 17.
    DealerTurn,
    /// Both hands stood; totals are compared next.
    Comparing,
    /// The outcome has been applied to the bankroll.
    Settled,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AwaitingBet => "awaiting bet",
            Self::Dealing => "dealing",
            Self::PlayerTurn => "player turn",
            Self::DealerTurn => "dealer turn",
            Self::Comparing => "comparing",
            Self::Settled => "settled",
        })
    }
}

/// An operation requested of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Player draws a card.
    Hit,
    /// Player keeps the hand.
    Stand,
    /// Dealer draws a card.
    DealerHit,
    /// Totals are compared.
    Compare,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::DealerHit => "dealer hit",
            Self::Compare => "compare",
        })
    }
}
