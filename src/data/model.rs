//! Core data types for grant disbursement records.

/// Known-bad upstream row: a transfer recorded from this source to this
/// destination is a data artifact and is dropped at load time, regardless
/// of pool. Kept as a named constant so the patch stays auditable.
pub const BLOCKED_TRANSFER: (&str, &str) = ("opencollective", "nativesintech");

/// One grant disbursement row.
#[derive(Debug, Clone, PartialEq)]
pub struct GrantRecord {
    /// Grouping key: the funding round / pool this grant belongs to.
    pub pool_name: String,
    /// Project the funds came from.
    pub from_project: String,
    /// Project the funds went to.
    pub to_project: String,
    /// Disbursed amount (non-negative).
    pub amount: f64,
}

impl GrantRecord {
    /// Whether this record matches the [`BLOCKED_TRANSFER`] pair.
    pub fn is_blocked_transfer(&self) -> bool {
        self.from_project == BLOCKED_TRANSFER.0 && self.to_project == BLOCKED_TRANSFER.1
    }
}

/// The full loaded dataset: all records (in source order) plus the sorted
/// list of distinct pool names.
///
/// Invariant: never contains a record matching [`BLOCKED_TRANSFER`]. The
/// constructor enforces this so the invariant holds for every construction
/// path, not just the CSV loader.
#[derive(Debug, Clone, Default)]
pub struct GrantDataset {
    records: Vec<GrantRecord>,
    pool_names: Vec<String>,
}

impl GrantDataset {
    /// Build a dataset from raw records, dropping blocked transfers and
    /// indexing the distinct pool names.
    pub fn from_records(records: Vec<GrantRecord>) -> Self {
        let records: Vec<GrantRecord> = records
            .into_iter()
            .filter(|r| !r.is_blocked_transfer())
            .collect();

        let mut pool_names: Vec<String> = records.iter().map(|r| r.pool_name.clone()).collect();
        pool_names.sort();
        pool_names.dedup();

        Self {
            records,
            pool_names,
        }
    }

    /// All records, in source order.
    pub fn records(&self) -> &[GrantRecord] {
        &self.records
    }

    /// Distinct pool names, sorted.
    pub fn pool_names(&self) -> &[String] {
        &self.pool_names
    }

    /// Amounts of all records in the given pool, in source order.
    pub fn amounts_for_pool(&self, pool_name: &str) -> Vec<f64> {
        self.records
            .iter()
            .filter(|r| r.pool_name == pool_name)
            .map(|r| r.amount)
            .collect()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pool: &str, from: &str, to: &str, amount: f64) -> GrantRecord {
        GrantRecord {
            pool_name: pool.to_string(),
            from_project: from.to_string(),
            to_project: to.to_string(),
            amount,
        }
    }

    #[test]
    fn blocked_transfer_is_dropped_others_kept() {
        let ds = GrantDataset::from_records(vec![
            record("round-1", "alpha", "beta", 10.0),
            record("round-1", BLOCKED_TRANSFER.0, BLOCKED_TRANSFER.1, 99.0),
            record("round-2", "gamma", "delta", 5.0),
        ]);

        assert_eq!(ds.len(), 2);
        assert!(ds.records().iter().all(|r| !r.is_blocked_transfer()));
        assert_eq!(ds.records()[0].from_project, "alpha");
        assert_eq!(ds.records()[1].from_project, "gamma");
    }

    #[test]
    fn blocked_pair_only_matches_both_fields() {
        // Same source, different destination: must survive.
        let ds = GrantDataset::from_records(vec![
            record("round-1", BLOCKED_TRANSFER.0, "someproject", 1.0),
            record("round-1", "someproject", BLOCKED_TRANSFER.1, 2.0),
        ]);
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn pool_names_sorted_and_deduped() {
        let ds = GrantDataset::from_records(vec![
            record("zeta", "a", "b", 1.0),
            record("alpha", "c", "d", 2.0),
            record("zeta", "e", "f", 3.0),
        ]);
        assert_eq!(ds.pool_names(), &["alpha".to_string(), "zeta".to_string()]);
    }

    #[test]
    fn amounts_preserve_source_order() {
        let ds = GrantDataset::from_records(vec![
            record("round-1", "a", "b", 3.0),
            record("round-2", "c", "d", 7.0),
            record("round-1", "e", "f", 1.0),
        ]);
        assert_eq!(ds.amounts_for_pool("round-1"), vec![3.0, 1.0]);
    }

    #[test]
    fn empty_dataset_is_valid() {
        let ds = GrantDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.pool_names().is_empty());
    }
}
