use crate::bankroll::Bankroll;
use crate::card::Card;
use crate::error::RoundError;
use crate::hand::BLACKJACK;
use crate::result::SettleReason;

use super::{Action, Phase, Round};

impl Round {
    /// Player action: Hit (draw a card).
    ///
    /// Reaching exactly 21 wins the round and going over 21 loses it; the
    /// dealer does not play in either case. Otherwise the player keeps the
    /// turn.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::IllegalAction`] outside [`Phase::PlayerTurn`],
    /// or [`RoundError::DeckExhausted`] if the deck is empty.
    pub fn hit(&mut self, bankroll: &mut Bankroll) -> Result<Card, RoundError> {
        self.ensure_phase(Action::Hit, Phase::PlayerTurn)?;

        let card = self.draw()?;
        self.player.add_card(card);

        let value = self.player.value();
        if value == BLACKJACK {
            self.settle(SettleReason::PlayerTwentyOne, bankroll);
        } else if value > BLACKJACK {
            self.settle(SettleReason::PlayerBust, bankroll);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Hands the turn to the dealer and evaluates the dealer's hand at once,
    /// so the round moves to [`Phase::DealerTurn`], [`Phase::Comparing`], or
    /// straight to [`Phase::Settled`]. Returns the new phase.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::IllegalAction`] outside [`Phase::PlayerTurn`].
    pub fn stand(&mut self, bankroll: &mut Bankroll) -> Result<Phase, RoundError> {
        self.ensure_phase(Action::Stand, Phase::PlayerTurn)?;

        self.transition(Phase::DealerTurn);
        self.evaluate_dealer(bankroll);

        Ok(self.phase)
    }
}
