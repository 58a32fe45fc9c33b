use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// The two private cards of one player for one round.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Hole([Card; 2]);

impl Hole {
    pub fn cards(&self) -> [Card; 2] {
        self.0
    }
    pub fn ranks(&self) -> [Rank; 2] {
        self.0.map(|c| c.rank())
    }
    pub fn is_pocket_pair(&self) -> bool {
        self.0[0].rank() == self.0[1].rank()
    }
    pub fn is_suited(&self) -> bool {
        self.0[0].suit() == self.0[1].suit()
    }
    /// the hole cards of a given suit
    pub fn of(&self, suit: Suit) -> impl Iterator<Item = Card> + '_ {
        self.0.iter().copied().filter(move |c| c.suit() == suit)
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        assert!(a != b, "hole cards must be distinct");
        Self([a, b])
    }
}

/// "Ah Kd"
impl TryFrom<&str> for Hole {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> anyhow::Result<Self> {
        let cards = s
            .split_whitespace()
            .map(Card::try_from)
            .collect::<anyhow::Result<Vec<Card>>>()?;
        match cards.as_slice() {
            [a, b] if a != b => Ok(Self([*a, *b])),
            _ => Err(anyhow::anyhow!("a hole is two distinct cards: {:?}", s)),
        }
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hole() {
        let hole = Hole::try_from("Ah Kh").unwrap();
        assert!(hole.ranks() == [Rank::Ace, Rank::King]);
        assert!(hole.is_suited());
        assert!(!hole.is_pocket_pair());
        assert!(hole.to_string() == "AhKh");
    }

    #[test]
    fn reject_malformed() {
        assert!(Hole::try_from("Ah").is_err());
        assert!(Hole::try_from("Ah Ah").is_err());
        assert!(Hole::try_from("Ah Kh Qh").is_err());
    }
}
