use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// Hand represents an unordered set of Cards, one bit per card in the
/// 52 LSBs of a u64. This is what the evaluator consumes.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub fn add(lhs: Self, rhs: Self) -> Self {
        assert!(u64::from(lhs) & u64::from(rhs) == 0);
        Self(lhs.0 | rhs.0)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    /// the sub-Hand of a single suit
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(self.0 & u64::from(*suit))
    }
    /// how many cards of this rank label. not `count`, which
    /// would lose to `Iterator::count` on the by-value receiver
    pub fn count_of(&self, rank: Rank) -> usize {
        (self.0 & (0xFu64 << (u8::from(rank) * 4))).count_ones() as usize
    }
    /// the remaining cards of the deck
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }

    const fn mask() -> u64 {
        0x000F_FFFF_FFFF_FFFF
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.0 &= self.0 - 1;
            Some(card)
        }
    }
}

/// u64 isomorphism
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        Self(
            cards
                .iter()
                .map(|c| u64::from(*c))
                .fold(0u64, |a, b| a | b),
        )
    }
}

/// one-way conversion to u16 Rank masks
/// zero-allocation, zero iteration. just shredding bits
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        let mut x = u64::from(h);
        x |= x >> 1;
        x |= x >> 2;
        x &= 0x1111111111111;
        let mut y = u64::default();
        y |= (x >> 00) & 0x0001;
        y |= (x >> 03) & 0x0002;
        y |= (x >> 06) & 0x0004;
        y |= (x >> 09) & 0x0008;
        y |= (x >> 12) & 0x0010;
        y |= (x >> 15) & 0x0020;
        y |= (x >> 18) & 0x0040;
        y |= (x >> 21) & 0x0080;
        y |= (x >> 24) & 0x0100;
        y |= (x >> 27) & 0x0200;
        y |= (x >> 30) & 0x0400;
        y |= (x >> 33) & 0x0800;
        y |= (x >> 36) & 0x1000;
        y as u16
    }
}

/// space separated cards, e.g. "Ah Kd 7c"
impl TryFrom<&str> for Hand {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> anyhow::Result<Self> {
        let cards = s
            .split_whitespace()
            .map(Card::try_from)
            .collect::<anyhow::Result<Vec<Card>>>()?;
        let hand = Self::from(cards.as_slice());
        match hand.size() == cards.len() {
            true => Ok(hand),
            false => Err(anyhow::anyhow!("duplicate cards in {:?}", s)),
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{} ", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_mask_projection() {
        let hand = Hand::try_from("2c 2d Ts Ah").unwrap();
        let mask = u16::from(Rank::Two) | u16::from(Rank::Ten) | u16::from(Rank::Ace);
        assert!(u16::from(hand) == mask);
    }

    #[test]
    fn counts_by_rank_and_suit() {
        let hand = Hand::try_from("9c 9d 9s Kd 4d").unwrap();
        assert!(hand.count_of(Rank::Nine) == 3);
        assert!(hand.count_of(Rank::Two) == 0);
        assert!(hand.of(&Suit::D).size() == 3);
    }

    #[test]
    fn iterates_every_card() {
        let hand = Hand::try_from("As 2c Jh").unwrap();
        assert!(Iterator::count(hand) == 3);
        assert!(hand.complement().size() == 49);
    }

    #[test]
    fn rejects_duplicates() {
        assert!(Hand::try_from("As As").is_err());
    }
}
