use crate::error::LoadError;
use crate::record::CountryRecord;

/// Ordered, read-only collection of country records loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<CountryRecord>,
}

impl Dataset {
    pub fn new(records: Vec<CountryRecord>) -> Self {
        Self { records }
    }

    /// Parse the dataset resource: a JSON array of `{name, url, count, label}`.
    pub fn from_json(payload: &str) -> Result<Self, LoadError> {
        let records: Vec<CountryRecord> = serde_json::from_str(payload)?;
        Ok(Self::new(records))
    }

    pub fn from_slice(payload: &[u8]) -> Result<Self, LoadError> {
        let records: Vec<CountryRecord> = serde_json::from_slice(payload)?;
        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose name matches case-insensitively.
    pub fn find_by_name(&self, name: &str) -> Option<&CountryRecord> {
        self.records.iter().find(|record| record.matches_name(name))
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// The `n` highest distinct counts, returned in ascending order.
    ///
    /// Index 0 is the n-th highest value and the last index is the maximum.
    /// With fewer than `n` distinct counts, all of them are returned.
    pub fn top_counts(&self, n: usize) -> Vec<i64> {
        let mut counts: Vec<i64> = self.records.iter().map(|record| record.count).collect();
        counts.sort_unstable();
        counts.dedup();
        let start = counts.len().saturating_sub(n);
        counts.split_off(start)
    }
}
