use super::hand_type::HandType;
use crate::Probability;
use crate::cards::Card;

/// The hand-strength service.
///
/// It assumes the standard rank order, so callers must hand it cards that
/// were already relabeled through the current permutation estimate.
/// Calls are blocking; iteration budgets bound their latency.
pub trait Oracle {
    /// (win, tie) probability of the first two cards given the remaining
    /// cards as board, against `n_players - 1` random opponents.
    fn evaluate(&self, cards: &[Card], n_players: usize, n_simulations: usize) -> (Probability, Probability);
    /// score and category of the best hand among `cards`. higher is stronger.
    fn classify(&self, cards: &[Card]) -> (u32, HandType);
}

impl<T> Oracle for &T
where
    T: Oracle + ?Sized,
{
    fn evaluate(&self, cards: &[Card], n_players: usize, n_simulations: usize) -> (Probability, Probability) {
        (**self).evaluate(cards, n_players, n_simulations)
    }
    fn classify(&self, cards: &[Card]) -> (u32, HandType) {
        (**self).classify(cards)
    }
}
