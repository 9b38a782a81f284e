//! A single player's game across rounds.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use log::info;
use rand::Rng;

use crate::bankroll::Bankroll;
use crate::card::Card;
use crate::deck::Deck;
use crate::error::SessionError;
use crate::options::SessionOptions;
use crate::result::Settlement;
use crate::round::{Phase, Round};

/// A player's name, bankroll, and current round.
///
/// The session is the unit a host stores between requests. Independent
/// sessions share nothing; one session must not be driven from two places
/// at once.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    player: String,
    bankroll: Bankroll,
    round: Option<Round>,
}

impl Session {
    /// Starts a session for `player` with the configured starting cash.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyName`] if the name is blank.
    pub fn new(player: &str, options: SessionOptions) -> Result<Self, SessionError> {
        let player = player.trim();
        if player.is_empty() {
            return Err(SessionError::EmptyName);
        }

        info!(
            "new session for {player} with {} cash",
            options.starting_cash
        );
        Ok(Self {
            player: player.to_string(),
            bankroll: Bankroll::with_cash(options.starting_cash),
            round: None,
        })
    }

    /// Returns the player's name.
    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    /// Returns the player's bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> &Bankroll {
        &self.bankroll
    }

    /// Returns the current round, if any.
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Returns the phase of the session's game.
    ///
    /// [`Phase::AwaitingBet`] while no round exists.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.round.as_ref().map_or(Phase::AwaitingBet, Round::phase)
    }

    /// Returns whether the player can no longer bet.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.bankroll.is_broke()
    }

    /// Parses a typed wager and starts a round with it.
    ///
    /// # Errors
    ///
    /// See [`Session::start_round`]; unparsable input is reported as
    /// [`BetError::NotANumber`](crate::BetError::NotANumber).
    pub fn place_bet<R: Rng + ?Sized>(
        &mut self,
        input: &str,
        rng: &mut R,
    ) -> Result<&Round, SessionError> {
        if self.is_game_over() {
            return Err(SessionError::Broke);
        }
        let bet = self.bankroll.parse_bet(input)?;
        self.start_round(bet, rng)
    }

    /// Starts a new round, discarding any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Broke`] if the player has no cash, or the
    /// round's [`InvalidBet`](crate::RoundError::InvalidBet) error. On error
    /// the previous round is kept.
    pub fn start_round<R: Rng + ?Sized>(
        &mut self,
        bet: usize,
        rng: &mut R,
    ) -> Result<&Round, SessionError> {
        if self.is_game_over() {
            return Err(SessionError::Broke);
        }
        let round = Round::start(&mut self.bankroll, bet, rng)?;
        Ok(&*self.round.insert(round))
    }

    /// Starts a new round dealt from `deck`, discarding any previous one.
    ///
    /// # Errors
    ///
    /// As [`Session::start_round`], plus
    /// [`DeckExhausted`](crate::RoundError::DeckExhausted) for a short deck.
    pub fn start_round_with_deck(
        &mut self,
        bet: usize,
        deck: Deck,
    ) -> Result<&Round, SessionError> {
        if self.is_game_over() {
            return Err(SessionError::Broke);
        }
        let round = Round::start_with_deck(&mut self.bankroll, bet, deck)?;
        Ok(&*self.round.insert(round))
    }

    fn round_mut(&mut self) -> Result<(&mut Round, &mut Bankroll), SessionError> {
        let round = self.round.as_mut().ok_or(SessionError::NoRound)?;
        Ok((round, &mut self.bankroll))
    }

    /// Player hits in the current round.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoRound`] or the round's error.
    pub fn player_hit(&mut self) -> Result<Card, SessionError> {
        let (round, bankroll) = self.round_mut()?;
        Ok(round.hit(bankroll)?)
    }

    /// Player stands in the current round.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoRound`] or the round's error.
    pub fn player_stand(&mut self) -> Result<Phase, SessionError> {
        let (round, bankroll) = self.round_mut()?;
        Ok(round.stand(bankroll)?)
    }

    /// Dealer draws one card in the current round.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoRound`] or the round's error.
    pub fn dealer_hit(&mut self) -> Result<Card, SessionError> {
        let (round, bankroll) = self.round_mut()?;
        Ok(round.dealer_hit(bankroll)?)
    }

    /// Compares totals in the current round.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoRound`] or the round's error.
    pub fn compare(&mut self) -> Result<Settlement, SessionError> {
        let (round, bankroll) = self.round_mut()?;
        Ok(round.compare(bankroll)?)
    }

    /// Plays the dealer's hand out in the current round.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoRound`] or the round's error.
    pub fn play_dealer(&mut self) -> Result<Vec<Card>, SessionError> {
        let (round, bankroll) = self.round_mut()?;
        Ok(round.play_dealer(bankroll)?)
    }

    /// Clears a settled round so the player can bet again.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::RoundInProgress`] if the round is not settled,
    /// or [`SessionError::Broke`] if the player has no cash left.
    pub fn play_again(&mut self) -> Result<(), SessionError> {
        if self.round.as_ref().is_some_and(|round| !round.is_settled()) {
            return Err(SessionError::RoundInProgress);
        }
        self.round = None;

        if self.is_game_over() {
            return Err(SessionError::Broke);
        }
        Ok(())
    }

    /// Ends the session, returning the player's final cash.
    #[must_use]
    pub fn finish(self) -> usize {
        info!(
            "{} leaves with {} cash",
            self.player,
            self.bankroll.cash()
        );
        self.bankroll.cash()
    }
}
