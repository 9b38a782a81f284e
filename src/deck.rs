//! The single-deck shoe used for one round.

extern crate alloc;

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{DeckExhausted, DuplicateCard};

/// An ordered deck of unique cards, drawn from the top.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDeck"))]
pub struct Deck {
    /// Remaining cards; the top of the deck is the end of the vector.
    cards: Vec<Card>,
}

impl Deck {
    /// Builds all 52 cards and shuffles them once with `rng`.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds a shuffled deck from a seed, for reproducible play.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack21::{DECK_SIZE, Deck};
    ///
    /// let a = Deck::from_seed(7);
    /// let b = Deck::from_seed(7);
    /// assert_eq!(a, b);
    /// assert_eq!(a.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Builds a stacked deck that yields `draws` in the given order.
    ///
    /// The deck need not be complete, but every card must be unique.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateCard`] if a card appears more than once.
    pub fn from_cards<I>(draws: I) -> Result<Self, DuplicateCard>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut cards: Vec<Card> = draws.into_iter().collect();
        ensure_unique(&cards)?;
        cards.reverse();
        Ok(Self { cards })
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckExhausted`] if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, DeckExhausted> {
        self.cards.pop().ok_or(DeckExhausted)
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Fails on the first card that has already been seen.
pub(crate) fn ensure_unique<'a, I>(cards: I) -> Result<(), DuplicateCard>
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut seen: Vec<Card> = Vec::with_capacity(DECK_SIZE);
    for &card in cards {
        if seen.contains(&card) {
            return Err(DuplicateCard(card));
        }
        seen.push(card);
    }
    Ok(())
}

/// Stored form of a [`Deck`], checked for duplicates on load.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDeck {
    cards: Vec<Card>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDeck> for Deck {
    type Error = DuplicateCard;

    fn try_from(raw: RawDeck) -> Result<Self, Self::Error> {
        ensure_unique(&raw.cards)?;
        Ok(Self { cards: raw.cards })
    }
}
