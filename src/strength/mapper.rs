use crate::Probability;
use crate::cards::Board;
use crate::cards::Card;
use crate::cards::Hole;
use crate::cards::Rank;
use crate::evaluation::HandType;
use crate::evaluation::Oracle;
use crate::order::Permutation;

/// Relabels symbolic cards through a permutation estimate.
///
/// The oracle assumes the standard order, so every card it sees must
/// come through here. A mapper is a snapshot: build a new one whenever
/// the estimate changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankMapper(Permutation);

impl From<&Permutation> for RankMapper {
    fn from(estimate: &Permutation) -> Self {
        Self(*estimate)
    }
}

impl RankMapper {
    pub fn rank(&self, rank: Rank) -> Rank {
        self.0.image(rank)
    }
    pub fn card(&self, card: Card) -> Card {
        self.0.relabel(card)
    }
    pub fn cards(&self, cards: &[Card]) -> Vec<Card> {
        cards.iter().map(|c| self.card(*c)).collect()
    }
    /// relabeling is a bijection, so the two cards stay distinct
    pub fn hole(&self, hole: &Hole) -> Hole {
        let [a, b] = hole.cards();
        Hole::from((self.card(a), self.card(b)))
    }

    /// (win, tie) of the hole against one random opponent
    pub fn evaluate<O: Oracle>(&self, oracle: &O, hole: &Hole, board: &Board, n_simulations: usize) -> (Probability, Probability) {
        let cards = self.together(hole, board);
        oracle.evaluate(&cards, crate::N_PLAYERS, n_simulations)
    }

    /// score and category, attributing the category to the hole cards.
    ///
    /// when the hole cards neither change the board's category nor raise
    /// its score, the player is playing the board and their hand counts
    /// as whatever the hole cards alone make.
    pub fn classify<O: Oracle>(&self, oracle: &O, hole: &Hole, board: &Board) -> (u32, HandType) {
        let full = self.together(hole, board);
        if board.cards().is_empty() {
            return oracle.classify(&full);
        }
        let (public, public_kind) = oracle.classify(&self.cards(board.cards()));
        let (score, kind) = oracle.classify(&full);
        match kind == public_kind && score <= public {
            false => (score, kind),
            true => match hole.is_pocket_pair() {
                true => (score, HandType::OnePair),
                false => (score, HandType::HighCard),
            },
        }
    }

    /// category of the best hand among hole and board, wherever it comes from
    pub fn category<O: Oracle>(&self, oracle: &O, hole: &Hole, board: &Board) -> HandType {
        oracle.classify(&self.together(hole, board)).1
    }

    fn together(&self, hole: &Hole, board: &Board) -> Vec<Card> {
        hole.cards()
            .iter()
            .chain(board.cards().iter())
            .map(|c| self.card(*c))
            .collect()
    }
}
