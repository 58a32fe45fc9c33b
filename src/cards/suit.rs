/// Suits are opaque symbols. They are never permuted or inferred.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

impl Suit {
    pub const fn all() -> [Self; 4] {
        [Self::C, Self::D, Self::H, Self::S]
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::C,
            1 => Suit::D,
            2 => Suit::H,
            3 => Suit::S,
            _ => panic!("invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 injection
/// every card of this suit in the 52-bit Hand layout
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        0x0001_1111_1111_1111 << u8::from(s)
    }
}

impl TryFrom<char> for Suit {
    type Error = anyhow::Error;
    fn try_from(c: char) -> anyhow::Result<Self> {
        match c {
            'c' => Ok(Suit::C),
            'd' => Ok(Suit::D),
            'h' => Ok(Suit::H),
            's' => Ok(Suit::S),
            _ => Err(anyhow::anyhow!("invalid suit symbol: {}", c)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::C => "c",
                Suit::D => "d",
                Suit::H => "h",
                Suit::S => "s",
            }
        )
    }
}
