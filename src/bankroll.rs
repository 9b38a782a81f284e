//! The player's cash balance.

use crate::error::BetError;
use crate::result::Outcome;

/// Cash a new player starts with.
pub const INITIAL_CASH: usize = 500;

/// A player's cash balance, carried across rounds.
///
/// Cash changes only when a round settles, by exactly the amount wagered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bankroll {
    cash: usize,
}

impl Bankroll {
    /// Creates a bankroll holding [`INITIAL_CASH`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_cash(INITIAL_CASH)
    }

    /// Creates a bankroll holding `cash`.
    #[must_use]
    pub const fn with_cash(cash: usize) -> Self {
        Self { cash }
    }

    /// Returns the current cash balance.
    #[must_use]
    pub const fn cash(&self) -> usize {
        self.cash
    }

    /// Returns whether `amount` is a valid wager (`1 <= amount <= cash`).
    #[must_use]
    pub const fn can_bet(&self, amount: usize) -> bool {
        amount >= 1 && amount <= self.cash
    }

    /// Checks a wager against the balance.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::NotPositive`] for zero and
    /// [`BetError::InsufficientFunds`] when `amount` exceeds the cash.
    pub const fn validate_bet(&self, amount: usize) -> Result<usize, BetError> {
        if amount == 0 {
            return Err(BetError::NotPositive);
        }
        if amount > self.cash {
            return Err(BetError::InsufficientFunds { cash: self.cash });
        }
        Ok(amount)
    }

    /// Parses a wager typed by the player and checks it against the balance.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::NotANumber`] for non-numeric input,
    /// [`BetError::NotPositive`] for zero or negative amounts, and
    /// [`BetError::InsufficientFunds`] when the amount exceeds the cash.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack21::{Bankroll, BetError};
    ///
    /// let bankroll = Bankroll::new();
    /// assert_eq!(bankroll.parse_bet(" 100 "), Ok(100));
    /// assert_eq!(bankroll.parse_bet("-5"), Err(BetError::NotPositive));
    /// assert_eq!(bankroll.parse_bet("ten"), Err(BetError::NotANumber));
    /// ```
    pub fn parse_bet(&self, input: &str) -> Result<usize, BetError> {
        let input = input.trim();
        let (negative, digits) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input.strip_prefix('+').unwrap_or(input)),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BetError::NotANumber);
        }
        if negative {
            return Err(BetError::NotPositive);
        }

        // All digits but too large for usize: more than anyone can hold.
        digits.parse::<usize>().map_or(
            Err(BetError::InsufficientFunds { cash: self.cash }),
            |amount| self.validate_bet(amount),
        )
    }

    /// Applies a round outcome: a win adds `amount`, a loss removes it, a tie
    /// leaves the balance unchanged.
    ///
    /// A loss larger than the balance empties it rather than wrapping.
    pub const fn settle(&mut self, outcome: Outcome, amount: usize) {
        match outcome {
            Outcome::Win => self.cash = self.cash.saturating_add(amount),
            Outcome::Loss => self.cash = self.cash.saturating_sub(amount),
            Outcome::Tie => {}
        }
    }

    /// Returns whether the player has no cash left to wager.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.cash == 0
    }
}

impl Default for Bankroll {
    fn default() -> Self {
        Self::new()
    }
}
