use super::cache::Reading;
use crate::Probability;
use crate::cards::Hole;
use crate::evaluation::HandType;
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;

/// `[win_probability, hand_type_id]`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Odds(pub Probability, pub HandType);

/// Precomputed preflop win probabilities, keyed by concatenated hole
/// cards in the standard order, e.g. `"AhKd"`.
#[derive(Debug, Clone)]
pub struct PreflopTable(HashMap<String, Odds>);

impl PreflopTable {
    /// read from `$PREFLOP_TABLE`, defaulting to the working directory
    pub fn load() -> anyhow::Result<Self> {
        Self::read(&crate::path("PREFLOP_TABLE", crate::PREFLOP_TABLE))
    }

    pub fn read(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("read preflop table {}", path))?;
        Self::from_json(&text).with_context(|| format!("parse preflop table {}", path))
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let odds = serde_json::from_str::<HashMap<String, Odds>>(text)?;
        if odds.is_empty() {
            anyhow::bail!("preflop table is empty");
        }
        if let Some((key, _)) = odds.iter().find(|(_, o)| !(0. ..=1.).contains(&o.0)) {
            anyhow::bail!("preflop odds for {} outside [0, 1]", key);
        }
        log::info!("loaded {} preflop hands", odds.len());
        Ok(Self(odds))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// lookup of an already relabeled hole, in either card order
    pub fn get(&self, hole: &Hole) -> anyhow::Result<Reading> {
        let [a, b] = hole.cards();
        self.0
            .get(&format!("{}{}", a, b))
            .or_else(|| self.0.get(&format!("{}{}", b, a)))
            .map(|odds| Reading {
                strength: odds.0,
                kind: odds.1,
            })
            .ok_or_else(|| anyhow::anyhow!("hole {} missing from preflop table", hole))
    }

    /// every win probability in the table, in no particular order
    pub fn strengths(&self) -> Vec<Probability> {
        self.0.values().map(|odds| odds.0).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"{"AhKd": [0.64, 0], "7c7s": [0.66, 1], "2c7d": [0.32, 0]}"#;

    #[test]
    fn lookups_accept_either_order() {
        let table = PreflopTable::from_json(TABLE).unwrap();
        let ak = table.get(&Hole::try_from("Ah Kd").unwrap()).unwrap();
        let ka = table.get(&Hole::try_from("Kd Ah").unwrap()).unwrap();
        assert!(ak == ka);
        assert!(ak.strength == 0.64);
        assert!(ak.kind == HandType::HighCard);
    }

    #[test]
    fn missing_holes_are_errors() {
        let table = PreflopTable::from_json(TABLE).unwrap();
        assert!(table.get(&Hole::try_from("Ah Kc").unwrap()).is_err());
    }

    #[test]
    fn malformed_tables_are_errors() {
        assert!(PreflopTable::from_json("{}").is_err());
        assert!(PreflopTable::from_json(r#"{"AhKd": [0.64, 14]}"#).is_err());
        assert!(PreflopTable::from_json(r#"{"AhKd": [1.64, 0]}"#).is_err());
        assert!(PreflopTable::from_json("[0.64, 0]").is_err());
    }

    #[test]
    fn strengths_cover_the_table() {
        let table = PreflopTable::from_json(TABLE).unwrap();
        let mut strengths = table.strengths();
        strengths.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert!(strengths == vec![0.32, 0.64, 0.66]);
    }

    #[test]
    fn missing_files_are_errors() {
        assert!(PreflopTable::read("no/such/preflop.json").is_err());
    }
}
