use crate::cards::Board;
use crate::cards::Hole;
use crate::cards::Rank;
use crate::cards::Suit;
use crate::evaluation::HandType;

/// The symbols a made hand is built from, read off rank counts.
///
/// Counting needs no rank order, which is what makes these readings
/// usable as evidence about the order. Each finder returns None when
/// the counts do not single out an answer.
pub struct Made<'a> {
    hole: &'a Hole,
    board: &'a Board,
}

impl<'a> From<(&'a Hole, &'a Board)> for Made<'a> {
    fn from((hole, board): (&'a Hole, &'a Board)) -> Self {
        Self { hole, board }
    }
}

impl Made<'_> {
    /// the rank of a pair, trips or quads
    pub fn multiple(&self, kind: HandType) -> Option<Rank> {
        let [a, b] = self.hole.ranks();
        let copies = match kind {
            HandType::OnePair => 1,
            HandType::ThreeOAK => 2,
            HandType::FourOAK => 3,
            _ => return None,
        };
        if a == b && (kind != HandType::FourOAK || self.board.count(a) == 2) {
            return Some(a);
        }
        [a, b].into_iter().find(|r| self.board.count(*r) == copies)
    }

    /// the ranks of both pairs
    pub fn two_pair(&self) -> Option<[Rank; 2]> {
        let [a, b] = self.hole.ranks();
        let mut pairs = match a == b {
            true => vec![a],
            false => [a, b]
                .into_iter()
                .filter(|r| self.board.count(*r) == 1)
                .collect::<Vec<Rank>>(),
        };
        let paired = self
            .board_with(2)
            .filter(|r| !pairs.contains(r))
            .collect::<Vec<Rank>>();
        pairs.extend(paired);
        // with three pairs the two in play depend on the order
        match pairs.as_slice() {
            [x, y] => Some([*x, *y]),
            _ => None,
        }
    }

    /// (trips rank, pair rank)
    pub fn full_house(&self) -> Option<(Rank, Rank)> {
        let [a, b] = self.hole.ranks();
        if a == b {
            return match self.board.count(a) {
                0 => self.board_with(3).next().map(|three| (three, a)),
                _ => self.board_with(2).next().map(|two| (a, two)),
            };
        }
        let mut three = None;
        let mut two = None;
        for rank in [a, b] {
            match self.board.count(rank) {
                2 => three = Some(rank),
                1 => two = Some(rank),
                _ => {}
            }
        }
        match (three, two) {
            (None, Some(_)) => three = self.board_with(3).next(),
            (Some(trip), None) => two = self.board_with(2).find(|r| *r != trip),
            _ => {}
        }
        three.zip(two)
    }

    /// the suit of a flush made with four board cards and one hole card
    pub fn flush_suit(&self) -> Option<Suit> {
        if self.hole.is_suited() {
            return None;
        }
        self.hole
            .cards()
            .into_iter()
            .map(|c| c.suit())
            .find(|s| self.board.suited(*s).count() == 4)
    }

    /// distinct board ranks showing exactly n times
    fn board_with(&self, n: usize) -> impl Iterator<Item = Rank> + '_ {
        Rank::all()
            .into_iter()
            .filter(move |r| self.board.count(*r) == n)
    }
}
