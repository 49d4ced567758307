use std::cell::Cell;
use std::collections::HashMap;

/// Hit/miss counters for distance lookups.
///
/// Counters use `Cell` so read-only queries can record them.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    hits: Cell<u64>,
    misses: Cell<u64>,
}

impl CacheStats {
    pub fn hits(&self) -> u64 {
        self.hits.get()
    }

    pub fn misses(&self) -> u64 {
        self.misses.get()
    }

    /// Cache hit rate as a percentage (0.0-100.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits() + self.misses();
        if total == 0 {
            0.0
        } else {
            (self.hits() as f64 / total as f64) * 100.0
        }
    }

    fn record_hit(&self) {
        self.hits.set(self.hits.get() + 1);
    }

    fn record_miss(&self) {
        self.misses.set(self.misses.get() + 1);
    }
}

/// All-pairs distance table filled by Floyd-Warshall.
///
/// `table[i][j]` is the distance from `names[i]` to `names[j]`. The table is
/// empty whenever `valid` is false.
#[derive(Debug, Clone, Default)]
pub struct DistanceCache {
    valid: bool,
    names: Vec<String>,
    index: HashMap<String, usize>,
    table: Vec<Vec<f64>>,
    stats: CacheStats,
}

impl DistanceCache {
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    pub(crate) fn store(&mut self, names: Vec<String>, table: Vec<Vec<f64>>) {
        self.index = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        self.names = names;
        self.table = table;
        self.valid = true;
    }

    pub(crate) fn invalidate(&mut self) {
        self.valid = false;
        self.names.clear();
        self.index.clear();
        self.table.clear();
    }

    /// Cached distance, recording a hit or a miss
    pub(crate) fn lookup(&self, from: &str, to: &str) -> Option<f64> {
        let found = self.get(from, to);
        match found {
            Some(_) => self.stats.record_hit(),
            None => self.stats.record_miss(),
        }
        found
    }

    /// Cached distance without touching the counters
    pub fn get(&self, from: &str, to: &str) -> Option<f64> {
        if !self.valid {
            return None;
        }
        let (i, j) = (self.index.get(from)?, self.index.get(to)?);
        Some(self.table[*i][*j])
    }

    /// Rows of the table in node order
    pub fn rows(&self) -> Vec<(&str, Vec<(&str, f64)>)> {
        self.names
            .iter()
            .zip(&self.table)
            .map(|(from, row)| {
                let targets = self
                    .names
                    .iter()
                    .zip(row)
                    .map(|(to, distance)| (to.as_str(), *distance))
                    .collect();
                (from.as_str(), targets)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> DistanceCache {
        let mut cache = DistanceCache::default();
        cache.store(
            vec!["A".to_string(), "B".to_string()],
            vec![vec![0.0, 2.0], vec![f64::INFINITY, 0.0]],
        );
        cache
    }

    #[test]
    fn test_lookup_after_store() {
        let cache = filled();
        assert!(cache.is_valid());
        assert_eq!(cache.lookup("A", "B"), Some(2.0));
        assert_eq!(cache.lookup("B", "A"), Some(f64::INFINITY));
        assert_eq!(cache.stats().hits(), 2);
    }

    #[test]
    fn test_invalidate_clears_table() {
        let mut cache = filled();
        cache.invalidate();
        assert!(!cache.is_valid());
        assert_eq!(cache.lookup("A", "B"), None);
        assert!(cache.rows().is_empty());
        assert_eq!(cache.stats().misses(), 1);
    }

    #[test]
    fn test_hit_rate() {
        let cache = filled();
        assert_eq!(cache.stats().hit_rate(), 0.0);
        cache.lookup("A", "A");
        cache.lookup("A", "Z");
        assert_eq!(cache.stats().hit_rate(), 50.0);
    }
}
