use super::bucket::Bucket;
use crate::N_ACTIONS;
use crate::Utility;
use anyhow::Context;

/// One bucket's values, one per abstract action.
pub type Row = [Utility; N_ACTIONS];

/// A dense bucket-by-action matrix, read once and never written.
#[derive(Debug, Clone)]
pub struct Table(Vec<Row>);

impl Table {
    pub fn read(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("read table {}", path))?;
        Self::from_csv(&text).with_context(|| format!("parse table {}", path))
    }

    /// one row per line, comma separated. blank lines are skipped.
    pub fn from_csv(text: &str) -> anyhow::Result<Self> {
        let rows = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| Self::parse(line).with_context(|| format!("line {}", i + 1)))
            .collect::<anyhow::Result<Vec<Row>>>()?;
        Self::from_rows(rows)
    }

    /// every bucket the encoding can produce needs a row
    pub fn from_rows(rows: Vec<Row>) -> anyhow::Result<Self> {
        if rows.len() < Bucket::COUNT {
            anyhow::bail!("table has {} rows, buckets need {}", rows.len(), Bucket::COUNT);
        }
        if let Some(i) = rows.iter().position(|row| row.iter().any(|x| !x.is_finite())) {
            anyhow::bail!("row {} is not finite", i);
        }
        Ok(Self(rows))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn row(&self, bucket: Bucket) -> &Row {
        &self.0[usize::from(bucket)]
    }

    fn parse(line: &str) -> anyhow::Result<Row> {
        let values = line
            .split(',')
            .map(|x| x.trim().parse::<Utility>().with_context(|| format!("not a number: {:?}", x)))
            .collect::<anyhow::Result<Vec<Utility>>>()?;
        Row::try_from(values.as_slice())
            .with_context(|| format!("expected {} columns, found {}", N_ACTIONS, values.len()))
    }
}

/// Regret sums and strategy sums, row-aligned by bucket.
#[derive(Debug, Clone)]
pub struct Tables {
    regret: Table,
    strategy: Table,
}

impl Tables {
    pub fn new(regret: Table, strategy: Table) -> anyhow::Result<Self> {
        if regret.len() != strategy.len() {
            anyhow::bail!(
                "regret table has {} rows, strategy table {}",
                regret.len(),
                strategy.len()
            );
        }
        Ok(Self { regret, strategy })
    }

    /// read from `$REGRET_TABLE` and `$STRATEGY_TABLE`, defaulting to the
    /// working directory
    pub fn load() -> anyhow::Result<Self> {
        let regret = Table::read(&crate::path("REGRET_TABLE", crate::REGRET_TABLE))?;
        let strategy = Table::read(&crate::path("STRATEGY_TABLE", crate::STRATEGY_TABLE))?;
        log::info!("loaded {} regret rows, {} strategy rows", regret.len(), strategy.len());
        Self::new(regret, strategy)
    }

    pub fn regret(&self, bucket: Bucket) -> &Row {
        self.regret.row(bucket)
    }
    pub fn strategy(&self, bucket: Bucket) -> &Row {
        self.strategy.row(bucket)
    }
    /// total weight accumulated in the bucket's strategy row
    pub fn visits(&self, bucket: Bucket) -> Utility {
        self.strategy(bucket).iter().sum()
    }
}
