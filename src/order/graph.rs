use super::permutation::Permutation;
use super::rule::Rule;
use super::verdict::Verdict;
use crate::cards::Rank;
use petgraph::Direction::Outgoing;
use petgraph::algo::has_path_connecting;
use petgraph::graphmap::DiGraphMap;
use std::cmp::Ordering;

/// Precedence facts over the thirteen rank symbols.
///
/// Outgoing edges run from the stronger symbol to the weaker one and
/// incoming edges are the reverse map. The graph is acyclic at every
/// observable point, and the estimate is always a topological order of it,
/// recomputed from scratch after each accepted batch.
///
/// Symbols the graph does not constrain are placed by label, so the
/// estimate is stable between batches that do not touch them.
#[derive(Debug, Clone)]
pub struct OrderGraph {
    graph: DiGraphMap<Rank, ()>,
    estimate: Permutation,
}

impl Default for OrderGraph {
    fn default() -> Self {
        let mut graph = DiGraphMap::with_capacity(Rank::COUNT, Rank::COUNT * (Rank::COUNT - 1) / 2);
        for rank in Rank::all() {
            graph.add_node(rank);
        }
        Self {
            graph,
            estimate: Permutation::identity(),
        }
    }
}

impl OrderGraph {
    /// the current best guess at the true order
    pub fn estimate(&self) -> &Permutation {
        &self.estimate
    }

    /// every stored edge, sorted
    pub fn edges(&self) -> Vec<Rule> {
        let mut edges = self
            .graph
            .all_edges()
            .map(|(upper, lower, _)| Rule::from((upper, lower)))
            .collect::<Vec<Rule>>();
        edges.sort();
        edges
    }

    pub fn len(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.edge_count() == 0
    }

    /// is `to` already known to be weaker than `from`?
    pub fn reachable(&self, from: Rank, to: Rank) -> bool {
        from != to && has_path_connecting(&self.graph, from, to, None)
    }

    /// known relative order of two symbols, if any
    pub fn compare(&self, a: Rank, b: Rank) -> Option<Ordering> {
        if a == b {
            Some(Ordering::Equal)
        } else if self.reachable(a, b) {
            Some(Ordering::Greater)
        } else if self.reachable(b, a) {
            Some(Ordering::Less)
        } else {
            None
        }
    }

    /// inserts the edge unless it is already stored. returns whether it was new.
    /// does not recompute the estimate; batches go through [`Self::apply_batch`].
    pub fn add_rule(&mut self, rule: Rule) -> bool {
        if self.graph.contains_edge(rule.upper(), rule.lower()) {
            false
        } else {
            self.graph.add_edge(rule.upper(), rule.lower(), ());
            true
        }
    }

    /// all-or-nothing admission of a batch of rules.
    ///
    /// rules already implied by reachability are skipped. if the
    /// resulting graph has a cycle, the pre-batch graph is restored
    /// exactly and the estimate is left untouched.
    pub fn apply_batch(&mut self, rules: &[Rule]) -> Verdict {
        if rules.is_empty() {
            return Verdict::Abstained;
        }
        let snapshot = self.graph.clone();
        let mut added = 0;
        for rule in rules {
            if self.reachable(rule.upper(), rule.lower()) {
                continue;
            }
            if self.add_rule(*rule) {
                added += 1;
            }
        }
        match self.toposort() {
            Some(estimate) => {
                self.estimate = estimate;
                log::info!("accepted {} rules, {} new edges", rules.len(), added);
                log::debug!("estimate {}", self.estimate);
                Verdict::Accepted { added }
            }
            None => {
                self.graph = snapshot;
                log::info!("rejected {} rules: cycle", rules.len());
                Verdict::Rejected
            }
        }
    }

    /// Kahn's algorithm, building the order from the weakest end.
    /// among the symbols whose known inferiors are all placed,
    /// the lowest label goes next. None if a cycle blocks progress.
    fn toposort(&self) -> Option<Permutation> {
        let mut placed = 0u16;
        let mut order = Rank::all();
        for slot in order.iter_mut() {
            let next = Rank::all()
                .into_iter()
                .filter(|rank| placed & u16::from(*rank) == 0)
                .find(|rank| {
                    self.graph
                        .neighbors_directed(*rank, Outgoing)
                        .all(|lower| placed & u16::from(lower) != 0)
                })?;
            placed |= u16::from(next);
            *slot = next;
        }
        Some(Permutation::from(order))
    }
}

/// same edges and same estimate
impl PartialEq for OrderGraph {
    fn eq(&self, other: &Self) -> bool {
        self.estimate == other.estimate && self.edges() == other.edges()
    }
}
impl Eq for OrderGraph {}
