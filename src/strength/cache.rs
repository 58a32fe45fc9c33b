use super::mapper::RankMapper;
use crate::Probability;
use crate::cards::Board;
use crate::cards::Hole;
use crate::cards::Rank;
use crate::evaluation::HandType;
use crate::evaluation::Oracle;
use std::collections::HashMap;

/// Strength and category of a hole on a board, as fed to bucketing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub strength: Probability,
    pub kind: HandType,
}

impl std::fmt::Display for Reading {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:.3} {}", self.strength, self.kind)
    }
}

/// relabeled hole ranks and relabeled board ranks, both sorted.
/// suits are not part of the key.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct Key {
    hole: [Rank; 2],
    board: Vec<Rank>,
}

impl Key {
    fn new(mapper: &RankMapper, hole: &Hole, board: &Board) -> Self {
        let mut ranks = hole.ranks().map(|r| mapper.rank(r));
        ranks.sort();
        let mut public = board
            .cards()
            .iter()
            .map(|c| mapper.rank(c.rank()))
            .collect::<Vec<Rank>>();
        public.sort();
        Self {
            hole: ranks,
            board: public,
        }
    }
}

/// Per-round read-through cache of postflop oracle results.
///
/// Straights are discounted before they are stored, so a hit returns
/// exactly what the first miss computed.
#[derive(Debug, Default)]
pub struct StrengthCache(HashMap<Key, Reading>);

impl StrengthCache {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get<O: Oracle>(&mut self, oracle: &O, mapper: &RankMapper, hole: &Hole, board: &Board) -> Reading {
        let key = Key::new(mapper, hole, board);
        *self.0.entry(key).or_insert_with(|| {
            let (win, _) = mapper.evaluate(oracle, hole, board, crate::SIMULATIONS);
            let (_, kind) = mapper.classify(oracle, hole, board);
            let strength = match kind {
                HandType::Straight => win * crate::STRAIGHT_DISCOUNT,
                _ => win,
            };
            let reading = Reading { strength, kind };
            log::debug!("strength {} {} -> {}", hole, board, reading);
            reading
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::order::Permutation;
    use std::cell::Cell;

    /// fixed answers, counting evaluations
    struct Stub {
        win: Probability,
        kind: HandType,
        calls: Cell<usize>,
    }

    impl Stub {
        fn new(win: Probability, kind: HandType) -> Self {
            Self {
                win,
                kind,
                calls: Cell::new(0),
            }
        }
    }

    impl Oracle for Stub {
        fn evaluate(&self, _: &[Card], _: usize, _: usize) -> (Probability, Probability) {
            self.calls.set(self.calls.get() + 1);
            (self.win, 0.)
        }
        fn classify(&self, cards: &[Card]) -> (u32, HandType) {
            (cards.len() as u32, self.kind)
        }
    }

    fn mapper() -> RankMapper {
        RankMapper::from(&Permutation::identity())
    }

    #[test]
    fn hits_skip_the_oracle() {
        let oracle = Stub::new(0.6, HandType::OnePair);
        let mut cache = StrengthCache::default();
        let hole = Hole::try_from("Ah Kd").unwrap();
        let board = Board::try_from("2c 7d 9s").unwrap();
        let first = cache.get(&oracle, &mapper(), &hole, &board);
        let again = cache.get(&oracle, &mapper(), &hole, &board);
        assert!(first == again);
        assert!(oracle.calls.get() == 1);
        assert!(cache.len() == 1);
    }

    #[test]
    fn suits_do_not_matter() {
        let oracle = Stub::new(0.6, HandType::OnePair);
        let mut cache = StrengthCache::default();
        let board = Board::try_from("2c 7d 9s").unwrap();
        cache.get(&oracle, &mapper(), &Hole::try_from("Ah Kd").unwrap(), &board);
        cache.get(&oracle, &mapper(), &Hole::try_from("Kc As").unwrap(), &board);
        assert!(oracle.calls.get() == 1);
    }

    #[test]
    fn each_street_is_a_new_entry() {
        let oracle = Stub::new(0.6, HandType::OnePair);
        let mut cache = StrengthCache::default();
        let hole = Hole::try_from("Ah Kd").unwrap();
        let mut board = Board::try_from("2c 7d 9s").unwrap();
        cache.get(&oracle, &mapper(), &hole, &board);
        board.advance(Board::try_from("2c 7d 9s 9c").unwrap().cards());
        cache.get(&oracle, &mapper(), &hole, &board);
        assert!(oracle.calls.get() == 2);
    }

    #[test]
    fn straights_are_discounted_once() {
        let oracle = Stub::new(0.8, HandType::Straight);
        let mut cache = StrengthCache::default();
        let hole = Hole::try_from("Ah Kd").unwrap();
        let board = Board::try_from("Qc Jd Ts").unwrap();
        let first = cache.get(&oracle, &mapper(), &hole, &board);
        let again = cache.get(&oracle, &mapper(), &hole, &board);
        assert!(first.strength == 0.8 * crate::STRAIGHT_DISCOUNT);
        assert!(again.strength == first.strength);
    }
}
