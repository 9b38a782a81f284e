//! Round outcome types for settlement.

use core::fmt;

/// Result of a round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Player wins the bet.
    Win,
    /// Player loses the bet.
    Loss,
    /// Tie; the bet is returned.
    Tie,
}

/// Why a round ended the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SettleReason {
    /// Player was dealt 21 on two cards.
    PlayerBlackjack,
    /// Dealer was dealt 21 on two cards.
    DealerBlackjack,
    /// Player hit to exactly 21.
    PlayerTwentyOne,
    /// Player hit past 21.
    PlayerBust,
    /// Dealer reached exactly 21 during the dealer turn.
    DealerTwentyOne,
    /// Dealer drew past 21.
    DealerBust,
    /// Both stood and the totals were compared.
    Stood {
        /// The player's final total.
        player: u16,
        /// The dealer's final total.
        dealer: u16,
    },
}

impl SettleReason {
    /// Returns the outcome this reason implies.
    #[must_use]
    pub const fn outcome(self) -> Outcome {
        match self {
            Self::PlayerBlackjack | Self::PlayerTwentyOne | Self::DealerBust => Outcome::Win,
            Self::DealerBlackjack | Self::PlayerBust | Self::DealerTwentyOne => Outcome::Loss,
            Self::Stood { player, dealer } => {
                if player > dealer {
                    Outcome::Win
                } else if player < dealer {
                    Outcome::Loss
                } else {
                    Outcome::Tie
                }
            }
        }
    }
}

impl fmt::Display for SettleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerBlackjack => f.write_str("player has blackjack"),
            Self::DealerBlackjack => f.write_str("dealer has blackjack"),
            Self::PlayerTwentyOne => f.write_str("player hit 21"),
            Self::PlayerBust => f.write_str("player busted"),
            Self::DealerTwentyOne => f.write_str("dealer hit 21"),
            Self::DealerBust => f.write_str("dealer busted"),
            Self::Stood { player, dealer } => {
                write!(f, "player stayed at {player}, dealer stayed at {dealer}")
            }
        }
    }
}

/// The settled result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settlement {
    /// The outcome applied to the bankroll.
    pub outcome: Outcome,
    /// Why the round ended.
    pub reason: SettleReason,
    /// The amount that was wagered.
    pub bet: usize,
    /// The player's final hand value.
    pub player_value: u16,
    /// The dealer's final hand value.
    pub dealer_value: u16,
    /// Cash after the outcome was applied.
    pub cash_after: usize,
}

impl Settlement {
    /// Net change to the bankroll (positive = profit, negative = loss).
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "bet amounts fit in isize")]
    pub const fn net(&self) -> isize {
        match self.outcome {
            Outcome::Win => self.bet as isize,
            Outcome::Loss => -(self.bet as isize),
            Outcome::Tie => 0,
        }
    }
}
