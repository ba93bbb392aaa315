use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::feature_tag::FeatureTag;

/// Occurrence count per feature for one query.
///
/// Counts only ever grow; nothing in the extractor removes or decrements an
/// entry. Absent keys read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureHistogram {
    counts: HashMap<FeatureTag, u64>,
}

impl FeatureHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `tag`, returning the new count
    pub fn increment(&mut self, tag: FeatureTag) -> u64 {
        self.add(tag, 1)
    }

    /// Add `delta` occurrences of `tag`, returning the new count
    pub fn add(&mut self, tag: FeatureTag, delta: u64) -> u64 {
        let count = self.counts.entry(tag).or_insert(0);
        *count += delta;
        *count
    }

    /// Accumulate every count of `other` into `self`
    pub fn merge(&mut self, other: FeatureHistogram) {
        for (tag, count) in other.counts {
            self.add(tag, count);
        }
    }

    pub fn get(&self, tag: &FeatureTag) -> u64 {
        self.counts.get(tag).copied().unwrap_or(0)
    }

    pub fn contains(&self, tag: &FeatureTag) -> bool {
        self.counts.contains_key(tag)
    }

    /// Number of distinct tags present
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FeatureTag, u64)> {
        self.counts.iter().map(|(tag, count)| (tag, *count))
    }

    /// Counts keyed by tag name, in a stable order
    pub fn to_named_map(&self) -> BTreeMap<String, u64> {
        self.counts
            .iter()
            .map(|(tag, count)| (tag.name().into_owned(), *count))
            .collect()
    }

    /// Counts keyed by full tag IRI under `namespace`, in a stable order
    pub fn to_iri_map(&self, namespace: &str) -> BTreeMap<String, u64> {
        self.counts
            .iter()
            .map(|(tag, count)| (tag.iri(namespace), *count))
            .collect()
    }
}

impl FromIterator<(FeatureTag, u64)> for FeatureHistogram {
    fn from_iter<I: IntoIterator<Item = (FeatureTag, u64)>>(iter: I) -> Self {
        let mut histogram = FeatureHistogram::new();
        for (tag, count) in iter {
            histogram.add(tag, count);
        }
        histogram
    }
}

impl IntoIterator for FeatureHistogram {
    type Item = (FeatureTag, u64);
    type IntoIter = std::collections::hash_map::IntoIter<FeatureTag, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

impl Serialize for FeatureHistogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_named_map().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FeatureHistogram {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let counts = HashMap::<FeatureTag, u64>::deserialize(deserializer)?;
        Ok(FeatureHistogram { counts })
    }
}
