use super::rule::Rule;
use crate::cards::Card;
use crate::cards::Rank;

/// A total order over the thirteen rank symbols, lowest first.
///
/// The position of a symbol in this order is the standard rank the
/// evaluator should see in its place, so relabeling a card means
/// replacing its symbol with `Rank::from(position)`. The identity
/// estimate maps every symbol to itself.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Permutation {
    order: [Rank; Rank::COUNT],
    position: [u8; Rank::COUNT],
}

impl Default for Permutation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Permutation {
    pub fn identity() -> Self {
        Self::from(Rank::all())
    }
    /// symbols from weakest to strongest
    pub fn order(&self) -> &[Rank; Rank::COUNT] {
        &self.order
    }
    /// 0 for the weakest symbol, 12 for the strongest
    pub fn position(&self, rank: Rank) -> usize {
        self.position[rank as usize] as usize
    }
    /// the standard rank standing in for this symbol
    pub fn image(&self, rank: Rank) -> Rank {
        Rank::from(self.position[rank as usize])
    }
    pub fn relabel(&self, card: Card) -> Card {
        card.relabel(self.image(card.rank()))
    }
    pub fn respects(&self, rule: &Rule) -> bool {
        self.position(rule.upper()) > self.position(rule.lower())
    }
}

/// lowest-first arrangement of every symbol exactly once
impl From<[Rank; Rank::COUNT]> for Permutation {
    fn from(order: [Rank; Rank::COUNT]) -> Self {
        let mut position = [u8::MAX; Rank::COUNT];
        for (i, rank) in order.iter().enumerate() {
            assert!(position[*rank as usize] == u8::MAX, "{} placed twice", rank);
            position[*rank as usize] = i as u8;
        }
        Self { order, position }
    }
}

impl std::fmt::Display for Permutation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, rank) in self.order.iter().enumerate() {
            match i {
                0 => write!(f, "{}", rank)?,
                _ => write!(f, "<{}", rank)?,
            }
        }
        Ok(())
    }
}
