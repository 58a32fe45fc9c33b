use super::hand_type::HandType;
use crate::cards::Hand;
use crate::cards::Rank;
use crate::cards::Suit;

const WHEEL: u16 = 0b_1000000001111;

/// A hand's value under the standard label order.
///
/// `primary` holds the ranks that define the category, `kicks` the ranks
/// that break ties within it. Both are 13-bit rank masks, so for equal
/// categories comparing masks compares the highest differing rank first.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    kind: HandType,
    primary: u16,
    kicks: u16,
}

impl Strength {
    pub fn kind(&self) -> HandType {
        self.kind
    }
}

/// monotone score: category, then defining ranks, then kickers
impl From<Strength> for u32 {
    fn from(s: Strength) -> u32 {
        (u8::from(s.kind) as u32) << 26 | (s.primary as u32) << 13 | s.kicks as u32
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<15} {}", self.kind, Rank::from(self.primary))
    }
}

/// A lazy evaluator for a hand's strength.
///
/// Using a compact representation of the Hand, we search for
/// the highest category using bitwise operations. Works for any
/// number of cards; categories that need five cards simply never match.
pub struct Evaluator(Hand);
impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Evaluator {
    pub fn strength(&self) -> Strength {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .unwrap_or_else(|| self.find_1_oak())
    }

    fn find_1_oak(&self) -> Strength {
        Strength {
            kind: HandType::HighCard,
            primary: Self::top(self.ranks(), 5),
            kicks: 0,
        }
    }
    fn find_2_oak(&self) -> Option<Strength> {
        self.find_rank_of_n_oak(2, 0).map(|pair| {
            let pair = u16::from(pair);
            Strength {
                kind: HandType::OnePair,
                primary: pair,
                kicks: Self::top(self.ranks() & !pair, 3),
            }
        })
    }
    fn find_3_oak(&self) -> Option<Strength> {
        self.find_rank_of_n_oak(3, 0).map(|trip| {
            let trip = u16::from(trip);
            Strength {
                kind: HandType::ThreeOAK,
                primary: trip,
                kicks: Self::top(self.ranks() & !trip, 2),
            }
        })
    }
    fn find_4_oak(&self) -> Option<Strength> {
        self.find_rank_of_n_oak(4, 0).map(|quad| {
            let quad = u16::from(quad);
            Strength {
                kind: HandType::FourOAK,
                primary: quad,
                kicks: Self::top(self.ranks() & !quad, 1),
            }
        })
    }
    fn find_2_oak_2_oak(&self) -> Option<Strength> {
        self.find_rank_of_n_oak(2, 0).and_then(|hi| {
            let hi = u16::from(hi);
            self.find_rank_of_n_oak(2, hi).map(|lo| {
                let both = hi | u16::from(lo);
                Strength {
                    kind: HandType::TwoPair,
                    primary: both,
                    kicks: Self::top(self.ranks() & !both, 1),
                }
            })
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Strength> {
        self.find_rank_of_n_oak(3, 0).and_then(|trip| {
            let trip = u16::from(trip);
            self.find_rank_of_n_oak(2, trip).map(|pair| Strength {
                kind: HandType::FullHouse,
                primary: trip,
                kicks: u16::from(pair),
            })
        })
    }
    fn find_flush(&self) -> Option<Strength> {
        self.find_suit_of_flush().map(|suit| Strength {
            kind: HandType::Flush,
            primary: Self::top(u16::from(self.0.of(&suit)), 5),
            kicks: 0,
        })
    }
    fn find_straight(&self) -> Option<Strength> {
        Self::find_rank_of_straight(self.ranks()).map(|high| Strength {
            kind: HandType::Straight,
            primary: u16::from(high),
            kicks: 0,
        })
    }
    fn find_straight_flush(&self) -> Option<Strength> {
        self.find_suit_of_flush().and_then(|suit| {
            Self::find_rank_of_straight(u16::from(self.0.of(&suit))).map(|high| Strength {
                kind: match high {
                    Rank::Ace => HandType::RoyalFlush,
                    _ => HandType::StraightFlush,
                },
                primary: u16::from(high),
                kicks: 0,
            })
        })
    }

    fn ranks(&self) -> u16 {
        u16::from(self.0)
    }
    fn find_rank_of_straight(ranks: u16) -> Option<Rank> {
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == (WHEEL & ranks) {
            Some(Rank::Five)
        } else {
            None
        }
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|suit| self.0.of(suit).size() >= 5)
    }
    /// highest rank with at least n copies, skipping any rank in `skip`
    fn find_rank_of_n_oak(&self, n: usize, skip: u16) -> Option<Rank> {
        Rank::all()
            .into_iter()
            .rev()
            .filter(|r| u16::from(*r) & skip == 0)
            .find(|r| self.0.count_of(*r) >= n)
    }
    /// keep only the n highest ranks of a mask
    fn top(mut ranks: u16, n: usize) -> u16 {
        while ranks.count_ones() as usize > n {
            ranks &= ranks - 1;
        }
        ranks
    }
}
