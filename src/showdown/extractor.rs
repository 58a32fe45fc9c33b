use super::made::Made;
use super::showdown::Showdown;
use crate::cards::Board;
use crate::cards::Hole;
use crate::cards::Rank;
use crate::cards::Suit;
use crate::evaluation::HandType;
use crate::evaluation::Oracle;
use crate::order::OrderGraph;
use crate::order::Rule;
use crate::strength::RankMapper;
use std::cmp::Ordering;

/// Derives precedence rules from showdowns.
///
/// Both hands are classified under the current estimate. Only hands of
/// the same category are compared, and then only through the symbols
/// that distinguish them, which rank counting identifies without any
/// rank order. Anything ambiguous yields no rules.
pub struct RuleExtractor<'a, O> {
    oracle: &'a O,
    graph: &'a OrderGraph,
}

impl<'a, O: Oracle> RuleExtractor<'a, O> {
    pub fn new(oracle: &'a O, graph: &'a OrderGraph) -> Self {
        Self { oracle, graph }
    }

    pub fn extract(&self, showdown: &Showdown) -> Vec<Rule> {
        let Some(villain) = showdown.villain() else {
            return Vec::new();
        };
        let hero = showdown.hero();
        let board = showdown.board();
        let mapper = RankMapper::from(self.graph.estimate());
        let mut rules = match showdown.ranked() {
            None => {
                let kind = mapper.category(self.oracle, hero, board);
                match kind == mapper.category(self.oracle, villain, board) {
                    true => Self::tied(kind, hero, villain, board),
                    false => Vec::new(),
                }
            }
            Some((winner, loser)) => {
                let (_, kind) = mapper.classify(self.oracle, winner, board);
                match kind == mapper.classify(self.oracle, loser, board).1 {
                    true => self.decided(kind, winner, loser, board),
                    false => Vec::new(),
                }
            }
        };
        rules.sort();
        rules.dedup();
        for rule in rules.iter() {
            log::debug!("rule {} from {}", rule, showdown);
        }
        rules
    }

    /// a tie on a board flush puts every suited hole card
    /// below every board card of that suit
    fn tied(kind: HandType, hero: &Hole, villain: &Hole, board: &Board) -> Vec<Rule> {
        if kind != HandType::Flush {
            return Vec::new();
        }
        let Some(suit) = Suit::all()
            .into_iter()
            .find(|s| board.suited(*s).count() >= 4)
        else {
            return Vec::new();
        };
        hero.of(suit)
            .chain(villain.of(suit))
            .flat_map(|hole| {
                board
                    .suited(suit)
                    .map(move |top| Rule::from((top.rank(), hole.rank())))
            })
            .collect()
    }

    fn decided(&self, kind: HandType, winner: &Hole, loser: &Hole, board: &Board) -> Vec<Rule> {
        if kind.is_straight_like() {
            return Vec::new();
        }
        let w = Made::from((winner, board));
        let l = Made::from((loser, board));
        match kind {
            HandType::HighCard => self
                .higher(winner.ranks())
                .map(|upper| Self::over(upper, loser.ranks()))
                .unwrap_or_default(),
            HandType::TwoPair => match (w.two_pair(), l.two_pair()) {
                (Some(upper), Some(lower)) => self.two_pair(upper, lower),
                _ => Vec::new(),
            },
            HandType::Flush => match (w.flush_suit(), l.flush_suit()) {
                (Some(a), Some(b)) if a == b => winner
                    .of(a)
                    .zip(loser.of(b))
                    .map(|(upper, lower)| Rule::from((upper.rank(), lower.rank())))
                    .collect(),
                _ => Vec::new(),
            },
            HandType::FullHouse => match (w.full_house(), l.full_house()) {
                (Some((t1, _)), Some((t2, _))) if t1 != t2 => vec![Rule::from((t1, t2))],
                (Some((_, p1)), Some((_, p2))) if p1 != p2 => vec![Rule::from((p1, p2))],
                _ => Vec::new(),
            },
            kind if kind.is_n_oak() => match (w.multiple(kind), l.multiple(kind)) {
                (Some(upper), Some(lower)) if upper != lower => vec![Rule::from((upper, lower))],
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    /// shared pairs say nothing. one distinguishing pair each compares
    /// directly; two each need the winner's own pairs to be ordered.
    fn two_pair(&self, winner: [Rank; 2], loser: [Rank; 2]) -> Vec<Rule> {
        let upper = winner
            .into_iter()
            .filter(|r| !loser.contains(r))
            .collect::<Vec<Rank>>();
        let lower = loser
            .into_iter()
            .filter(|r| !winner.contains(r))
            .collect::<Vec<Rank>>();
        match (upper.as_slice(), lower.as_slice()) {
            ([u], [l]) => vec![Rule::from((*u, *l))],
            ([_, _], [_, _]) => self
                .higher(winner)
                .map(|upper| Self::over(upper, loser))
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// the known stronger of two symbols
    fn higher(&self, [a, b]: [Rank; 2]) -> Option<Rank> {
        match self.graph.compare(a, b)? {
            Ordering::Greater => Some(a),
            Ordering::Less => Some(b),
            Ordering::Equal => None,
        }
    }

    fn over(upper: Rank, lowers: [Rank; 2]) -> Vec<Rule> {
        lowers
            .into_iter()
            .filter(|r| *r != upper)
            .map(|lower| Rule::from((upper, lower)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::Simulator;
    use crate::order::Verdict;
    use crate::showdown::Outcome;

    fn showdown(hero: &str, villain: &str, board: &str, outcome: Outcome) -> Showdown {
        Showdown::new(
            Hole::try_from(hero).unwrap(),
            Some(Hole::try_from(villain).unwrap()),
            Board::try_from(board).unwrap(),
            outcome,
        )
    }

    fn extract(graph: &OrderGraph, showdown: &Showdown) -> Vec<Rule> {
        RuleExtractor::new(&Simulator, graph).extract(showdown)
    }

    fn rule(upper: Rank, lower: Rank) -> Rule {
        Rule::from((upper, lower))
    }

    #[test]
    fn higher_pair_wins() {
        let mut graph = OrderGraph::default();
        let evidence = showdown("9c 9d", "4h 4s", "2c 7d Jh Ks 3s", Outcome::Hero);
        let rules = extract(&graph, &evidence);
        assert!(rules == vec![rule(Rank::Nine, Rank::Four)]);
        assert!(graph.apply_batch(&rules) == Verdict::Accepted { added: 1 });
        assert!(graph.reachable(Rank::Nine, Rank::Four));
        assert!(graph.estimate().position(Rank::Nine) > graph.estimate().position(Rank::Four));
    }

    #[test]
    fn villain_wins_reverse_the_rule() {
        let graph = OrderGraph::default();
        let evidence = showdown("9c 9d", "4h 4s", "2c 7d Jh Ks 3s", Outcome::Villain);
        assert!(extract(&graph, &evidence) == vec![rule(Rank::Four, Rank::Nine)]);
    }

    #[test]
    fn shared_pair_abstains() {
        let graph = OrderGraph::default();
        let evidence = showdown("Kc 5d", "Kh 6s", "Kd 2c 8h Js 3s", Outcome::Villain);
        assert!(extract(&graph, &evidence).is_empty());
    }

    #[test]
    fn shared_two_pair_abstains() {
        let graph = OrderGraph::default();
        let evidence = showdown("Kc 3d", "Qc 4h", "As Ad 9s 9c 2h", Outcome::Hero);
        assert!(extract(&graph, &evidence).is_empty());
    }

    #[test]
    fn third_pair_on_board_abstains() {
        let mut graph = OrderGraph::default();
        let evidence = showdown("Ac 9d", "Qh Qs", "As 9s Kd Kc 2h", Outcome::Hero);
        assert!(extract(&graph, &evidence).is_empty());
        graph.apply_batch(&[rule(Rank::King, Rank::Ace), rule(Rank::Ace, Rank::Nine)]);
        assert!(extract(&graph, &evidence).is_empty());
    }

    #[test]
    fn shared_trips_abstain() {
        let graph = OrderGraph::default();
        let evidence = showdown("9c Kd", "9h Qs", "9d 9s 2c 5h 7d", Outcome::Hero);
        assert!(extract(&graph, &evidence).is_empty());
    }

    #[test]
    fn higher_trips_win() {
        let graph = OrderGraph::default();
        let evidence = showdown("8c 8d", "5h 5s", "8s 5c 2d Jh Kc", Outcome::Hero);
        assert!(extract(&graph, &evidence) == vec![rule(Rank::Eight, Rank::Five)]);
    }

    #[test]
    fn shared_quads_abstain() {
        let graph = OrderGraph::default();
        let evidence = showdown("Kd 3c", "Qh 4s", "9c 9d 9h 9s 2c", Outcome::Hero);
        assert!(extract(&graph, &evidence).is_empty());
    }

    #[test]
    fn higher_quads_win() {
        let graph = OrderGraph::default();
        let evidence = showdown("7c 7d", "4h 4s", "7h 7s 4c 4d Ks", Outcome::Villain);
        assert!(extract(&graph, &evidence) == vec![rule(Rank::Four, Rank::Seven)]);
    }

    #[test]
    fn two_pair_with_a_common_pair() {
        let graph = OrderGraph::default();
        let evidence = showdown("Ac 9d", "Kc 9h", "As Kd 9s 4c 2h", Outcome::Hero);
        assert!(extract(&graph, &evidence) == vec![rule(Rank::Ace, Rank::King)]);
    }

    #[test]
    fn high_card_needs_known_hole_order() {
        let mut graph = OrderGraph::default();
        let evidence = showdown("Kc 5d", "Qh 9s", "2c 3d 7h 8s Jd", Outcome::Hero);
        assert!(extract(&graph, &evidence).is_empty());
        graph.apply_batch(&[rule(Rank::King, Rank::Five)]);
        let rules = extract(&graph, &evidence);
        assert!(rules == vec![rule(Rank::King, Rank::Nine), rule(Rank::King, Rank::Queen)]);
    }

    #[test]
    fn four_card_flush() {
        let graph = OrderGraph::default();
        let evidence = showdown("3h Ac", "4h Ad", "7h 8h Jh Kh 2c", Outcome::Villain);
        assert!(extract(&graph, &evidence) == vec![rule(Rank::Four, Rank::Three)]);
    }

    #[test]
    fn tied_board_flush() {
        let mut graph = OrderGraph::default();
        let evidence = showdown("2h Ac", "3h Ad", "7h 8h 9h Jh Kh", Outcome::Tie);
        let rules = extract(&graph, &evidence);
        assert!(rules.len() == 10);
        for top in [Rank::Seven, Rank::Eight, Rank::Nine, Rank::Jack, Rank::King] {
            assert!(rules.contains(&rule(top, Rank::Two)));
            assert!(rules.contains(&rule(top, Rank::Three)));
        }
        assert!(graph.apply_batch(&rules) == Verdict::Accepted { added: 10 });
    }

    #[test]
    fn full_house_compares_pairs_under_shared_trips() {
        let graph = OrderGraph::default();
        let evidence = showdown("4c Ad", "2d Kc", "9c 9d 9h 4s 2c", Outcome::Hero);
        assert!(extract(&graph, &evidence) == vec![rule(Rank::Four, Rank::Two)]);
    }

    #[test]
    fn straights_teach_nothing() {
        let graph = OrderGraph::default();
        let evidence = showdown("Tc Jd", "6c 3h", "5s 7h 8d 9c Kh", Outcome::Hero);
        assert!(extract(&graph, &evidence).is_empty());
    }

    #[test]
    fn mismatched_categories_teach_nothing() {
        let graph = OrderGraph::default();
        let evidence = showdown("9c 9d", "Ah Ks", "2c 7d Jh 4s 3s", Outcome::Hero);
        assert!(extract(&graph, &evidence).is_empty());
    }

    #[test]
    fn mucked_villain_teaches_nothing() {
        let graph = OrderGraph::default();
        let evidence = Showdown::new(
            Hole::try_from("9c 9d").unwrap(),
            None,
            Board::try_from("2c 7d Jh Ks 3s").unwrap(),
            Outcome::Hero,
        );
        assert!(extract(&graph, &evidence).is_empty());
    }

    #[test]
    fn contradicting_evidence_is_rejected() {
        let mut graph = OrderGraph::default();
        let first = showdown("9c 9d", "4h 4s", "2c 7d Jh Ks 3s", Outcome::Hero);
        let rules = extract(&graph, &first);
        graph.apply_batch(&rules);
        let second = showdown("9h 9s", "4c 4d", "2h 7c Jd Kc 3d", Outcome::Villain);
        let rules = extract(&graph, &second);
        assert!(rules == vec![rule(Rank::Four, Rank::Nine)]);
        assert!(graph.apply_batch(&rules).is_rejected());
        assert!(graph.edges() == vec![rule(Rank::Nine, Rank::Four)]);
    }
}
