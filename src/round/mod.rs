//! The round state machine.

use log::{debug, info};

use crate::bankroll::Bankroll;
use crate::card::Card;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::result::{Outcome, SettleReason, Settlement};

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use dealer::DEALER_STANDS_AT;
pub use state::{Action, Phase};

/// One round of blackjack between the player and the dealer.
///
/// A round owns its deck and both hands. It is a plain value: the caller
/// keeps it between actions and passes the player's [`Bankroll`] to every
/// action that may settle the round. Actions attempted in the wrong phase
/// fail with [`RoundError::IllegalAction`] and leave the round untouched.
///
/// # Example
///
/// ```
/// use blackjack21::{Bankroll, Phase, Round};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut bankroll = Bankroll::new();
/// let mut rng = ChaCha8Rng::seed_from_u64(3);
/// let mut round = Round::start(&mut bankroll, 50, &mut rng).unwrap();
///
/// if round.phase() == Phase::PlayerTurn {
///     round.stand(&mut bankroll).unwrap();
///     round.play_dealer(&mut bankroll).unwrap();
/// }
/// assert_eq!(round.phase(), Phase::Settled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRound"))]
pub struct Round {
    phase: Phase,
    deck: Deck,
    player: Hand,
    dealer: Hand,
    /// Wager for this round; cleared on settlement.
    bet: Option<usize>,
    settlement: Option<Settlement>,
}

impl Round {
    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whether the round has been settled.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self.phase, Phase::Settled)
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the dealer's first card, the one shown during the player turn.
    #[must_use]
    pub fn dealer_up_card(&self) -> Option<&Card> {
        self.dealer.cards().first()
    }

    /// Returns the wager while the round is unsettled.
    #[must_use]
    pub const fn bet(&self) -> Option<usize> {
        self.bet
    }

    /// Returns the settlement once the round is over.
    #[must_use]
    pub const fn settlement(&self) -> Option<&Settlement> {
        self.settlement.as_ref()
    }

    /// Returns the outcome once the round is over.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.settlement.map(|s| s.outcome)
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Fails unless the round is in `expected`.
    fn ensure_phase(&self, action: Action, expected: Phase) -> Result<(), RoundError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(self.illegal(action))
        }
    }

    const fn illegal(&self, action: Action) -> RoundError {
        RoundError::IllegalAction {
            action,
            phase: self.phase,
        }
    }

    fn draw(&mut self) -> Result<Card, RoundError> {
        let card = self.deck.draw()?;
        debug!("drew {card}, {} cards left", self.deck.len());
        Ok(card)
    }

    fn transition(&mut self, phase: Phase) {
        debug!("round phase {} -> {}", self.phase, phase);
        self.phase = phase;
    }

    /// Applies the outcome implied by `reason` to the bankroll and ends the
    /// round.
    fn settle(&mut self, reason: SettleReason, bankroll: &mut Bankroll) -> Settlement {
        let outcome = reason.outcome();
        let bet = self.bet.take().unwrap_or_default();
        bankroll.settle(outcome, bet);

        let settlement = Settlement {
            outcome,
            reason,
            bet,
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
            cash_after: bankroll.cash(),
        };
        info!(
            "round settled: {outcome:?} ({reason}), bet {bet}, cash now {}",
            settlement.cash_after
        );

        self.settlement = Some(settlement);
        self.transition(Phase::Settled);
        settlement
    }
}

/// Stored form of a [`Round`], checked on load against the states the
/// actions can reach.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRound {
    phase: Phase,
    deck: Deck,
    player: Hand,
    dealer: Hand,
    bet: Option<usize>,
    settlement: Option<Settlement>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRound> for Round {
    type Error = crate::error::InvalidRoundState;

    fn try_from(raw: RawRound) -> Result<Self, Self::Error> {
        use crate::error::InvalidRoundState;

        let settled = match raw.phase {
            Phase::AwaitingBet | Phase::Dealing => {
                return Err(InvalidRoundState("round is not past the deal"));
            }
            Phase::PlayerTurn | Phase::DealerTurn | Phase::Comparing => false,
            Phase::Settled => true,
        };

        match raw.bet {
            Some(0) => return Err(InvalidRoundState("bet is zero")),
            Some(_) if settled => return Err(InvalidRoundState("settled round holds a bet")),
            None if !settled => return Err(InvalidRoundState("unsettled round has no bet")),
            _ => {}
        }
        if raw.settlement.is_some() != settled {
            return Err(InvalidRoundState("settlement does not match phase"));
        }
        if raw.player.len() < 2 || raw.dealer.len() < 2 {
            return Err(InvalidRoundState("hands hold fewer than two cards"));
        }

        let all_cards = raw
            .deck
            .cards()
            .iter()
            .chain(raw.player.cards())
            .chain(raw.dealer.cards());
        if crate::deck::ensure_unique(all_cards).is_err() {
            return Err(InvalidRoundState("card appears twice"));
        }

        Ok(Self {
            phase: raw.phase,
            deck: raw.deck,
            player: raw.player,
            dealer: raw.dealer,
            bet: raw.bet,
            settlement: raw.settlement,
        })
    }
}
