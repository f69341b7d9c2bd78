use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A card from the draw pool: one of the 52 standard cards, or the Joker.
///
/// The pool contains two copies of every standard card. The copies are
/// indistinguishable, so a `Card` has no identity beyond its rank and suit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Card {
    Standard { rank: Rank, suit: Suit },
    Joker,
}

/// The suit of a standard [card](Card).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    #[serde(rename = "♥")]
    Heart,
    #[serde(rename = "♣")]
    Club,
    #[serde(rename = "♦")]
    Diamond,
    #[serde(rename = "♠")]
    Spade,
}

/// The rank of a standard [card](Card).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "A")]
    Ace,
}

/// What a card is allowed to do on the board.
///
/// Every legality check in the board and every wildcard special case in the
/// strategies goes through [`Card::role()`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CardRole {
    /// May only be placed on a cell showing the same card.
    Standard,
    /// J♠ and J♥: removes an opposing unlocked chip, never places.
    OneEyed,
    /// J♣ and J♦: places on any empty cell.
    TwoEyed,
    /// Places on any empty cell or removes an opposing unlocked chip.
    Joker,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Heart, Suit::Club, Suit::Diamond, Suit::Spade];

    const fn from_ascii(byte: u8) -> Option<Suit> {
        match byte {
            b'H' => Some(Suit::Heart),
            b'C' => Some(Suit::Club),
            b'D' => Some(Suit::Diamond),
            b'S' => Some(Suit::Spade),
            _ => None,
        }
    }

    fn ascii(self) -> char {
        match self {
            Suit::Heart => 'H',
            Suit::Club => 'C',
            Suit::Diamond => 'D',
            Suit::Spade => 'S',
        }
    }
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    const fn from_ascii(byte: u8) -> Option<Rank> {
        match byte {
            b'2' => Some(Rank::Two),
            b'3' => Some(Rank::Three),
            b'4' => Some(Rank::Four),
            b'5' => Some(Rank::Five),
            b'6' => Some(Rank::Six),
            b'7' => Some(Rank::Seven),
            b'8' => Some(Rank::Eight),
            b'9' => Some(Rank::Nine),
            b'T' => Some(Rank::Ten),
            b'J' => Some(Rank::Jack),
            b'Q' => Some(Rank::Queen),
            b'K' => Some(Rank::King),
            b'A' => Some(Rank::Ace),
            _ => None,
        }
    }

    fn ascii(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.unicode_char())
    }
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Card::Standard { rank, suit }
    }

    pub const fn role(self) -> CardRole {
        match self {
            Card::Joker => CardRole::Joker,
            Card::Standard {
                rank: Rank::Jack,
                suit: Suit::Spade | Suit::Heart,
            } => CardRole::OneEyed,
            Card::Standard {
                rank: Rank::Jack, ..
            } => CardRole::TwoEyed,
            Card::Standard { .. } => CardRole::Standard,
        }
    }

    /// One-eyed Jacks and the Joker can take an opposing chip off the board.
    pub const fn can_remove(self) -> bool {
        matches!(self.role(), CardRole::OneEyed | CardRole::Joker)
    }

    /// Two-eyed Jacks and the Joker can be placed on any empty cell.
    pub const fn is_wildcard(self) -> bool {
        matches!(self.role(), CardRole::TwoEyed | CardRole::Joker)
    }

    /// Parses the two-byte ASCII code of a card, e.g. `b"TH"` or `b"JK"`.
    pub(crate) const fn from_ascii(code: [u8; 2]) -> Option<Card> {
        if code[0] == b'J' && code[1] == b'K' {
            return Some(Card::Joker);
        }
        match (Rank::from_ascii(code[0]), Suit::from_ascii(code[1])) {
            (Some(rank), Some(suit)) => Some(Card::Standard { rank, suit }),
            _ => None,
        }
    }

    /// The two-character ASCII code, the inverse of the [`FromStr`] instance.
    pub fn code(&self) -> String {
        match self {
            Card::Standard { rank, suit } => format!("{}{}", rank.ascii(), suit.ascii()),
            Card::Joker => String::from("JK"),
        }
    }

    /// Render this card as a Unicode playing cards character
    pub fn unicode_char(&self) -> char {
        // https://en.wikipedia.org/wiki/Playing_Cards_(Unicode_block)
        let (rank, suit) = match self {
            Card::Standard { rank, suit } => (*rank, *suit),
            Card::Joker => return '\u{1F0CF}',
        };
        let row = match suit {
            Suit::Spade => 0,
            Suit::Heart => 1,
            Suit::Diamond => 2,
            Suit::Club => 3,
        };
        let col = match rank {
            Rank::Ace => 1,
            Rank::Jack => 11,
            Rank::Queen => 13,
            Rank::King => 14,
            other => other as u32 + 2,
        };
        char::from_u32(0x1F0A0 + 16 * row + col).unwrap_or('?')
    }
}

/// The error type for the [`FromStr`] instance of [`Card`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFromStrErr {
    LessThanTwoChars,
    MoreThanTwoChars,
    InvalidRank,
    InvalidSuit,
}

impl std::error::Error for CardFromStrErr {}

impl std::fmt::Display for CardFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardFromStrErr::LessThanTwoChars => write!(f, "Card code has less than two characters"),
            CardFromStrErr::MoreThanTwoChars => write!(f, "Card code has more than two characters"),
            CardFromStrErr::InvalidRank => write!(f, "Card code has an invalid rank"),
            CardFromStrErr::InvalidSuit => write!(f, "Card code has an invalid suit"),
        }
    }
}

impl FromStr for Card {
    type Err = CardFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "JK" || s == "\u{1F0CF}" {
            return Ok(Card::Joker);
        }
        let mut chars = s.chars();
        let rank_char = chars.next().ok_or(CardFromStrErr::LessThanTwoChars)?;
        let suit_char = chars.next().ok_or(CardFromStrErr::LessThanTwoChars)?;
        if chars.next().is_some() {
            return Err(CardFromStrErr::MoreThanTwoChars);
        }
        let rank = u8::try_from(rank_char)
            .ok()
            .and_then(Rank::from_ascii)
            .ok_or(CardFromStrErr::InvalidRank)?;
        let suit = match suit_char {
            '♥' => Suit::Heart,
            '♣' => Suit::Club,
            '♦' => Suit::Diamond,
            '♠' => Suit::Spade,
            other => u8::try_from(other)
                .ok()
                .and_then(Suit::from_ascii)
                .ok_or(CardFromStrErr::InvalidSuit)?,
        };
        Ok(Card::Standard { rank, suit })
    }
}

/// Shorthand for creating cards from a two-character string.
///
/// The first character is the [rank](Rank) (note: 10 is `T`), the second is
/// the [suit](Suit), either as a letter (`H`, `C`, `D`, `S`) or as a unicode
/// character (♥, ♣, ♦, ♠). The Joker is `JK`.
///
/// ```
/// # use sequence::{card, Card, Rank, Suit};
/// assert_eq!(card!("T♥"), Card::Standard { rank: Rank::Ten, suit: Suit::Heart });
/// assert_eq!(card!("TH"), card!("T♥"));
/// assert_eq!(card!("JK"), Card::Joker);
/// ```
#[macro_export]
macro_rules! card {
    ($rs:literal) => {
        <$crate::Card as std::str::FromStr>::from_str($rs)
            .expect("Invalid card code given to card! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use card;

/// Number of cards in a fresh pool: two standard decks plus one Joker.
pub const DECK_SIZE: usize = 2 * 52 + 1;

/// The shared draw pile.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// An unshuffled pool of [`DECK_SIZE`] cards.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for _ in 0..2 {
            for rank in Rank::ALL {
                for suit in Suit::ALL {
                    cards.push(Card::Standard { rank, suit });
                }
            }
        }
        cards.push(Card::Joker);
        Self { cards }
    }

    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.cards.shuffle(rng);
        deck
    }

    /// Takes the top card, if any are left.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
