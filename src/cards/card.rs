use super::rank::Rank;
use super::suit::Suit;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    /// same suit, different rank label
    pub fn relabel(&self, rank: Rank) -> Self {
        Self {
            rank,
            suit: self.suit,
        }
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) + u8::from(c.rank) * 4
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

/// u64 isomorphism
/// each card is just one bit turned on
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}
impl From<u64> for Card {
    fn from(n: u64) -> Self {
        Self::from(n.trailing_zeros() as u8)
    }
}

/// str isomorphism, e.g. "Ah"
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> anyhow::Result<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => Ok(Self {
                rank: Rank::try_from(r)?,
                suit: Suit::try_from(s)?,
            }),
            _ => Err(anyhow::anyhow!("invalid card: {:?}", s)),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..52u8))
    }
}
