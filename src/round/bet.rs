use log::debug;
use rand::Rng;

use crate::bankroll::Bankroll;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::result::SettleReason;

use super::{Phase, Round};

impl Round {
    /// Accepts a wager, shuffles a fresh deck with `rng`, and deals the
    /// opening hands.
    ///
    /// See [`Round::start_with_deck`] for how the deal is resolved.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidBet`] unless `1 <= bet <= cash`; no round
    /// is created and the bankroll is unchanged.
    pub fn start<R: Rng + ?Sized>(
        bankroll: &mut Bankroll,
        bet: usize,
        rng: &mut R,
    ) -> Result<Self, RoundError> {
        bankroll.validate_bet(bet)?;
        Self::start_with_deck(bankroll, bet, Deck::new(rng))
    }

    /// Accepts a wager and deals the opening hands from `deck`.
    ///
    /// The player receives the first two cards and the dealer the next two.
    /// A player blackjack settles the round as a win straight away, even
    /// when the dealer also holds one; otherwise a dealer blackjack settles
    /// it as a loss. In every other case the round waits in
    /// [`Phase::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidBet`] unless `1 <= bet <= cash`, or
    /// [`RoundError::DeckExhausted`] if `deck` holds fewer than four cards.
    /// Either way no round is created and the bankroll is unchanged.
    pub fn start_with_deck(
        bankroll: &mut Bankroll,
        bet: usize,
        mut deck: Deck,
    ) -> Result<Self, RoundError> {
        let bet = bankroll.validate_bet(bet)?;

        let mut player = Hand::new();
        let mut dealer = Hand::new();
        player.add_card(deck.draw()?);
        player.add_card(deck.draw()?);
        dealer.add_card(deck.draw()?);
        dealer.add_card(deck.draw()?);

        let mut round = Self {
            phase: Phase::Dealing,
            deck,
            player,
            dealer,
            bet: Some(bet),
            settlement: None,
        };
        debug!(
            "dealt player {}, dealer {} on a bet of {bet}",
            round.player.value(),
            round.dealer.value()
        );

        round.resolve_deal(bankroll);
        Ok(round)
    }

    fn resolve_deal(&mut self, bankroll: &mut Bankroll) {
        if self.player.is_blackjack() {
            self.settle(SettleReason::PlayerBlackjack, bankroll);
        } else if self.dealer.is_blackjack() {
            self.settle(SettleReason::DealerBlackjack, bankroll);
        } else {
            self.transition(Phase::PlayerTurn);
        }
    }
}
