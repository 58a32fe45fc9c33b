use super::card::Card;
use super::rank::Rank;
use super::street::Street;
use super::suit::Suit;

/// Community cards. Grows monotonically within a round and never reorders.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Board(Vec<Card>);

impl Board {
    pub fn new() -> Self {
        Self(Vec::with_capacity(5))
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn street(&self) -> Street {
        Street::from(self.0.len())
    }
    pub fn is_complete(&self) -> bool {
        self.0.len() == Street::Rive.n_observed()
    }
    /// catch up with the host's view of the board.
    /// the known cards must be a prefix of the new ones.
    pub fn advance(&mut self, cards: &[Card]) {
        assert!(cards.len() <= 5, "board holds at most five cards");
        assert!(
            cards.starts_with(&self.0),
            "board {} cannot become {:?}",
            self,
            cards
        );
        self.0.extend_from_slice(&cards[self.0.len()..]);
    }
    pub fn count(&self, rank: Rank) -> usize {
        self.0.iter().filter(|c| c.rank() == rank).count()
    }
    pub fn suited(&self, suit: Suit) -> impl Iterator<Item = Card> + '_ {
        self.0.iter().copied().filter(move |c| c.suit() == suit)
    }
}

impl From<Vec<Card>> for Board {
    fn from(cards: Vec<Card>) -> Self {
        let mut board = Self::new();
        board.advance(&cards);
        board
    }
}

impl TryFrom<&str> for Board {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> anyhow::Result<Self> {
        let cards = s
            .split_whitespace()
            .map(Card::try_from)
            .collect::<anyhow::Result<Vec<Card>>>()?;
        match cards.len() {
            0 | 3 | 4 | 5 => Ok(Self::from(cards)),
            n => Err(anyhow::anyhow!("no street has {} board cards", n)),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.0.iter() {
            write!(f, "{} ", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_by_street() {
        let mut board = Board::new();
        assert!(board.street() == Street::Pref);
        let river = Board::try_from("2c 7d 9h Js Ac").unwrap();
        board.advance(&river.cards()[..3]);
        assert!(board.street() == Street::Flop);
        board.advance(&river.cards()[..4]);
        assert!(board.street() == Street::Turn);
        board.advance(river.cards());
        assert!(board.street() == Street::Rive);
        assert!(board.is_complete());
    }

    #[test]
    #[should_panic]
    fn never_reorders() {
        let mut board = Board::try_from("2c 7d 9h").unwrap();
        let other = Board::try_from("7d 2c 9h Js").unwrap();
        board.advance(other.cards());
    }

    #[test]
    fn counts_ranks_and_suits() {
        let board = Board::try_from("7c 7d 9d Jd 7h").unwrap();
        assert!(board.count(Rank::Seven) == 3);
        assert!(board.suited(Suit::D).count() == 3);
    }
}
