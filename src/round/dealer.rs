extern crate alloc;

use alloc::vec::Vec;

use crate::bankroll::Bankroll;
use crate::card::Card;
use crate::error::RoundError;
use crate::hand::BLACKJACK;
use crate::result::{SettleReason, Settlement};

use super::{Action, Phase, Round};

/// The dealer draws below this total and stands on it or above.
pub const DEALER_STANDS_AT: u16 = 17;

impl Round {
    /// Evaluates the dealer's hand on entering the dealer turn and after
    /// every dealer draw.
    pub(super) fn evaluate_dealer(&mut self, bankroll: &mut Bankroll) {
        let value = self.dealer.value();

        if value == BLACKJACK {
            self.settle(SettleReason::DealerTwentyOne, bankroll);
        } else if value > BLACKJACK {
            self.settle(SettleReason::DealerBust, bankroll);
        } else if value >= DEALER_STANDS_AT {
            self.transition(Phase::Comparing);
        }
    }

    /// Dealer action: draw one card.
    ///
    /// Only valid during [`Phase::DealerTurn`], which the round holds only
    /// while the dealer is below 17. The dealer's hand is evaluated again
    /// after the draw.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::IllegalAction`] outside the dealer turn or when
    /// the dealer already has 17 or more, or [`RoundError::DeckExhausted`] if
    /// the deck is empty.
    pub fn dealer_hit(&mut self, bankroll: &mut Bankroll) -> Result<Card, RoundError> {
        self.ensure_phase(Action::DealerHit, Phase::DealerTurn)?;
        if self.dealer.value() >= DEALER_STANDS_AT {
            return Err(self.illegal(Action::DealerHit));
        }

        let card = self.draw()?;
        self.dealer.add_card(card);
        self.evaluate_dealer(bankroll);

        Ok(card)
    }

    /// Compares the totals of two standing hands and settles the round.
    ///
    /// Equal totals tie, otherwise the higher total wins.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::IllegalAction`] outside [`Phase::Comparing`].
    pub fn compare(&mut self, bankroll: &mut Bankroll) -> Result<Settlement, RoundError> {
        self.ensure_phase(Action::Compare, Phase::Comparing)?;

        let reason = SettleReason::Stood {
            player: self.player.value(),
            dealer: self.dealer.value(),
        };
        Ok(self.settle(reason, bankroll))
    }

    /// Plays the dealer's hand out and settles the round.
    ///
    /// Draws while the round stays in the dealer turn, then compares totals
    /// if both hands stand. Returns the cards the dealer drew.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::IllegalAction`] unless the round is in
    /// [`Phase::DealerTurn`] or [`Phase::Comparing`], or
    /// [`RoundError::DeckExhausted`] if the deck runs out; cards drawn
    /// before that stay in the dealer's hand.
    pub fn play_dealer(&mut self, bankroll: &mut Bankroll) -> Result<Vec<Card>, RoundError> {
        if !matches!(self.phase, Phase::DealerTurn | Phase::Comparing) {
            return Err(self.illegal(Action::DealerHit));
        }

        let mut drawn = Vec::new();
        while self.phase == Phase::DealerTurn {
            drawn.push(self.dealer_hit(bankroll)?);
        }

        if self.phase == Phase::Comparing {
            self.compare(bankroll)?;
        }

        Ok(drawn)
    }
}
