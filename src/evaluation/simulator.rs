use super::evaluator::Evaluator;
use super::evaluator::Strength;
use super::hand_type::HandType;
use super::oracle::Oracle;
use crate::Probability;
use crate::cards::Card;
use crate::cards::Hand;
use rand::seq::SliceRandom;
use std::cmp::Ordering;

/// Monte Carlo [`Oracle`] backed by the bitwise [`Evaluator`].
///
/// Each iteration completes the board and deals every opponent two cards
/// from the unseen deck, then compares best hands.
#[derive(Debug, Default, Clone, Copy)]
pub struct Simulator;

impl Simulator {
    fn strength(cards: Hand) -> Strength {
        Evaluator::from(cards).strength()
    }
}

impl Oracle for Simulator {
    fn evaluate(&self, cards: &[Card], n_players: usize, n_simulations: usize) -> (Probability, Probability) {
        assert!(cards.len() >= 2 && cards.len() <= 7, "hole plus at most five board cards");
        assert!(n_players >= 2, "need an opponent");
        assert!(n_simulations > 0, "need at least one simulation");
        let (hole, board) = cards.split_at(2);
        let hole = Hand::from(hole);
        let board = Hand::from(board);
        let missing = 5 - board.size();
        let needed = missing + 2 * (n_players - 1);
        let ref mut rng = rand::rng();
        let mut deck = Hand::add(hole, board).complement().collect::<Vec<Card>>();
        let (mut wins, mut ties) = (0usize, 0usize);
        for _ in 0..n_simulations {
            let (drawn, _) = deck.partial_shuffle(rng, needed);
            let (runout, opponents) = drawn.split_at(missing);
            let public = Hand::add(board, Hand::from(runout));
            let hero = Self::strength(Hand::add(public, hole));
            let best = opponents
                .chunks(2)
                .map(|villain| Self::strength(Hand::add(public, Hand::from(villain))))
                .max()
                .expect("at least one opponent");
            match hero.cmp(&best) {
                Ordering::Greater => wins += 1,
                Ordering::Equal => ties += 1,
                Ordering::Less => {}
            }
        }
        let n = n_simulations as Probability;
        (wins as Probability / n, ties as Probability / n)
    }

    fn classify(&self, cards: &[Card]) -> (u32, HandType) {
        let strength = Self::strength(Hand::from(cards));
        (u32::from(strength), strength.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        Hand::try_from(s).unwrap().collect()
    }

    #[test]
    fn probabilities_are_bounded() {
        let (win, tie) = Simulator.evaluate(&cards("Ah Kd"), 2, 200);
        assert!(win >= 0. && tie >= 0.);
        assert!(win + tie <= 1. + 1e-6);
    }

    #[test]
    fn royal_flush_on_river_never_loses() {
        let mut hand = vec![Card::try_from("As").unwrap(), Card::try_from("Ks").unwrap()];
        hand.extend(cards("Qs Js Ts 2d 3c"));
        let (win, tie) = Simulator.evaluate(&hand, 2, 100);
        assert!(win + tie == 1.);
        assert!(win > 0.9);
    }

    #[test]
    fn classify_matches_evaluator() {
        let (score, kind) = Simulator.classify(&cards("7c 7d 7h 2s 2c"));
        assert!(kind == HandType::FullHouse);
        assert!(score > Simulator.classify(&cards("Ac Ad Ah Ks Qc")).0);
    }
}
