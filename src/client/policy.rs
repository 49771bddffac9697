use crate::SrvRecord;
use std::fmt::Debug;

/// Represents a strategy for choosing which SRV records become endpoints.
///
/// Implementations return references into `records`; the order of the
/// returned records is the order of the resulting endpoints.
pub trait Policy: Debug + Send + Sync {
    /// Chooses the records to use from those returned by a lookup, in the
    /// order the lookup produced them.
    fn select<'r>(&self, records: &'r [SrvRecord]) -> Vec<&'r SrvRecord>;
}

/// Lowest priority value present among `records`, if any.
pub fn min_priority(records: &[SrvRecord]) -> Option<u16> {
    records.iter().map(SrvRecord::priority).min()
}

fn with_priority(records: &[SrvRecord], priority: u16) -> impl Iterator<Item = &SrvRecord> {
    records.iter().filter(move |r| r.priority() == priority)
}

/// Policy that keeps every record sharing the lowest priority, in lookup
/// order. Weight is ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct LowestPriority;

impl Policy for LowestPriority {
    fn select<'r>(&self, records: &'r [SrvRecord]) -> Vec<&'r SrvRecord> {
        match min_priority(records) {
            Some(priority) => with_priority(records, priority).collect(),
            None => Vec::new(),
        }
    }
}

/// Policy that keeps every record sharing the lowest priority, shuffled so
/// that heavier records tend to come first per RFC 2782.
#[derive(Debug, Default, Clone, Copy)]
pub struct Weighted;

impl Policy for Weighted {
    fn select<'r>(&self, records: &'r [SrvRecord]) -> Vec<&'r SrvRecord> {
        let Some(priority) = min_priority(records) else {
            return Vec::new();
        };
        let mut selected = with_priority(records, priority).collect::<Vec<_>>();
        let mut rng = rand::rng();
        selected.sort_by_cached_key(|record| record.sort_key(&mut rng));
        selected
    }
}
