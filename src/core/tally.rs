//! Aggregation
//!
//! [`Tally`] is the accumulator reports thread through a walk. It replaces
//! per-script global counters: each report owns one, records what its scope
//! calls for, and reads the totals back when rendering.

use std::collections::{BTreeMap, HashSet};

use super::catalog::{Image, KernelProvenance, SupportTier};

/// Counts keyed by a closed classification
///
/// Keys that were never recorded read as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buckets<K: Ord> {
    counts: BTreeMap<K, usize>,
}

impl<K: Ord + Copy> Buckets<K> {
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    pub fn record(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    pub fn get(&self, key: K) -> usize {
        self.counts.get(&key).copied().unwrap_or(0)
    }

    /// Sum over every bucket
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl<K: Ord + Copy> Default for Buckets<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-report accumulator
#[derive(Debug, Clone, Default)]
pub struct Tally {
    devices: usize,
    images: usize,
    seen: HashSet<String>,
    support: Buckets<SupportTier>,
    kernels: Buckets<KernelProvenance>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one board
    pub fn record_device(&mut self) {
        self.devices += 1;
    }

    /// Count one image visit
    pub fn record_image(&mut self) {
        self.images += 1;
    }

    /// Remember a display name; `true` the first time it is seen
    pub fn first_sighting(&mut self, name: &str) -> bool {
        self.seen.insert(name.to_string())
    }

    /// Add an image's support tier and kernel provenance to the buckets
    pub fn classify(&mut self, image: &Image) {
        self.support.record(image.support);
        self.kernels.record(image.kernel);
    }

    pub fn devices(&self) -> usize {
        self.devices
    }

    /// Raw image visits
    pub fn images(&self) -> usize {
        self.images
    }

    /// Distinct display names seen so far
    pub fn unique_images(&self) -> usize {
        self.seen.len()
    }

    pub fn support(&self) -> &Buckets<SupportTier> {
        &self.support
    }

    pub fn kernels(&self) -> &Buckets<KernelProvenance> {
        &self.kernels
    }
}
