use serde::Deserialize;
use serde::Serialize;

/// The classifier's hand categories, ids 0–9 in increasing strength.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HandType {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOAK = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOAK = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandType {
    /// categories built from a single multiple-of-a-kind rank
    pub fn is_n_oak(&self) -> bool {
        matches!(self, Self::OnePair | Self::ThreeOAK | Self::FourOAK)
    }
    /// categories that rely on detecting a run of ranks
    pub fn is_straight_like(&self) -> bool {
        matches!(self, Self::Straight | Self::StraightFlush | Self::RoyalFlush)
    }
}

impl TryFrom<u8> for HandType {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> anyhow::Result<Self> {
        match n {
            0 => Ok(Self::HighCard),
            1 => Ok(Self::OnePair),
            2 => Ok(Self::TwoPair),
            3 => Ok(Self::ThreeOAK),
            4 => Ok(Self::Straight),
            5 => Ok(Self::Flush),
            6 => Ok(Self::FullHouse),
            7 => Ok(Self::FourOAK),
            8 => Ok(Self::StraightFlush),
            9 => Ok(Self::RoyalFlush),
            _ => Err(anyhow::anyhow!("unrecognized hand type id: {}", n)),
        }
    }
}
impl From<HandType> for u8 {
    fn from(kind: HandType) -> u8 {
        kind as u8
    }
}

/// the classifier's label vocabulary
impl TryFrom<&str> for HandType {
    type Error = anyhow::Error;
    fn try_from(label: &str) -> anyhow::Result<Self> {
        match label {
            "High Card" => Ok(Self::HighCard),
            "Pair" => Ok(Self::OnePair),
            "Two Pair" => Ok(Self::TwoPair),
            "Trips" => Ok(Self::ThreeOAK),
            "Straight" => Ok(Self::Straight),
            "Flush" => Ok(Self::Flush),
            "Full House" => Ok(Self::FullHouse),
            "Quads" => Ok(Self::FourOAK),
            "Straight Flush" => Ok(Self::StraightFlush),
            "Royal Flush" => Ok(Self::RoyalFlush),
            _ => Err(anyhow::anyhow!("unrecognized hand type label: {:?}", label)),
        }
    }
}

impl std::fmt::Display for HandType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::HighCard => write!(f, "High Card"),
            Self::OnePair => write!(f, "Pair"),
            Self::TwoPair => write!(f, "Two Pair"),
            Self::ThreeOAK => write!(f, "Trips"),
            Self::Straight => write!(f, "Straight"),
            Self::Flush => write!(f, "Flush"),
            Self::FullHouse => write!(f, "Full House"),
            Self::FourOAK => write!(f, "Quads"),
            Self::StraightFlush => write!(f, "Straight Flush"),
            Self::RoyalFlush => write!(f, "Royal Flush"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_roundtrip() {
        for id in 0..10u8 {
            let kind = HandType::try_from(id).unwrap();
            assert!(u8::from(kind) == id);
            assert!(HandType::try_from(kind.to_string().as_str()).unwrap() == kind);
        }
    }

    #[test]
    fn unknown_labels_are_errors() {
        assert!(HandType::try_from(10u8).is_err());
        assert!(HandType::try_from("Five of a Kind").is_err());
    }

    #[test]
    fn deserializes_from_id() {
        let kind = serde_json::from_str::<HandType>("6").unwrap();
        assert!(kind == HandType::FullHouse);
        assert!(serde_json::from_str::<HandType>("12").is_err());
    }
}
