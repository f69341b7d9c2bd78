use std::collections::BTreeSet;

use crate::{Card, CardRole};

/// The cards held by one player.
///
/// This is a multiset: both copies of a card may be held at the same time,
/// and the order of the cards carries no meaning.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new, empty hand.
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes one copy of `card`. Returns false if the card was not held.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&c| c == card) {
            Some(idx) => {
                self.cards.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// How many held cards can take a chip off the board (one-eyed Jacks and the Joker).
    pub fn removal_cards(&self) -> usize {
        self.cards.iter().filter(|card| card.can_remove()).count()
    }

    /// The distinct cards in this hand, keeping only one card per playable effect.
    ///
    /// The two one-eyed Jacks do the same thing, and so do the two two-eyed Jacks,
    /// so J♠ is dropped when J♥ is held and J♦ is dropped when J♣ is held.
    pub fn unique_by_effect(&self) -> BTreeSet<Card> {
        let mut unique: BTreeSet<Card> = self.cards.iter().copied().collect();
        let one_eyed = unique.iter().filter(|c| c.role() == CardRole::OneEyed).count();
        if one_eyed > 1 {
            unique.remove(&crate::card!("JS"));
        }
        let two_eyed = unique.iter().filter(|c| c.role() == CardRole::TwoEyed).count();
        if two_eyed > 1 {
            unique.remove(&crate::card!("JD"));
        }
        unique
    }

    /// The cards in display order: standard cards by suit and rank, then
    /// one-eyed Jacks, two-eyed Jacks and finally the Joker.
    pub fn sorted(&self) -> Vec<Card> {
        let mut cards = self.cards.clone();
        cards.sort_by_key(|&card| {
            let group = match card.role() {
                CardRole::Standard => 0,
                CardRole::OneEyed => 1,
                CardRole::TwoEyed => 2,
                CardRole::Joker => 3,
            };
            match card {
                Card::Standard { rank, suit } => (group, suit as u8, rank as u8),
                Card::Joker => (group, 0, 0),
            }
        });
        cards
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = Card;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Card>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card;

    #[test]
    fn remove_takes_a_single_copy() {
        let mut hand = Hand::from_iter([card!("5H"), card!("5H"), card!("JK")]);
        assert!(hand.remove(card!("5H")));
        assert_eq!(hand.len(), 2);
        assert!(hand.contains(card!("5H")));
        assert!(!hand.remove(card!("6H")));
        assert_eq!(hand.len(), 2);
    }

    #[test]
    fn removal_cards_counts_duplicates() {
        let hand = Hand::from_iter([card!("JS"), card!("JS"), card!("JH"), card!("JK"), card!("JC")]);
        assert_eq!(hand.removal_cards(), 4);
    }

    #[test]
    fn unique_by_effect_merges_equivalent_jacks() {
        let hand = Hand::from_iter([
            card!("JS"),
            card!("JH"),
            card!("JC"),
            card!("JD"),
            card!("2C"),
            card!("2C"),
        ]);
        let unique = hand.unique_by_effect();
        assert_eq!(
            unique,
            BTreeSet::from([card!("JH"), card!("JC"), card!("2C")])
        );

        // A single jack of a kind is kept as it is
        let hand = Hand::from_iter([card!("JS"), card!("JD")]);
        assert_eq!(hand.unique_by_effect(), BTreeSet::from([card!("JS"), card!("JD")]));
    }

    #[test]
    fn sorted_puts_wildcards_last() {
        let hand = Hand::from_iter([card!("JK"), card!("JC"), card!("AS"), card!("JS"), card!("2H")]);
        assert_eq!(
            hand.sorted(),
            vec![card!("2H"), card!("AS"), card!("JS"), card!("JC"), card!("JK")]
        );
    }
}
