// Landmark index: a chained hash table over the source buffer.
//
// The source is sampled at fixed, non-overlapping NHASH-byte blocks
// ("landmarks") rather than at every offset — a density/speed tradeoff.
// Matches that straddle a landmark boundary are still found by the
// encoder's backward/forward extension.
//
// Two parallel arrays, indices doubling as pointers:
//   - `heads[bucket]`  — most recently inserted block for that bucket
//   - `chain[block]`   — previously inserted block with the same bucket
//
// Both store `block + 1` so that 0 means "empty"; lookups return `Option`.
// Built once per encode call and read-only afterward.

use super::rolling::{NHASH, RollingHash};

/// Hash index over the source's landmark blocks.
pub struct LandmarkIndex {
    heads: Vec<u32>,
    chain: Vec<u32>,
}

impl LandmarkIndex {
    /// Index `source`, or `None` when `source.len() <= NHASH`: no landmark
    /// fits, so no copy can ever be found.
    pub fn build(source: &[u8]) -> Option<Self> {
        if source.len() <= NHASH {
            return None;
        }
        let buckets = source.len().div_ceil(NHASH);
        let mut heads = vec![0u32; buckets];
        let mut chain = vec![0u32; buckets];

        // The final partial window is deliberately not sampled.
        let mut block = 0usize;
        while block * NHASH < source.len() - NHASH {
            let hv = RollingHash::new(source, block * NHASH).value() as usize % buckets;
            chain[block] = heads[hv];
            heads[hv] = block as u32 + 1;
            block += 1;
        }
        Some(Self { heads, chain })
    }

    /// Number of hash buckets (`ceil(source_len / NHASH)`).
    pub fn bucket_count(&self) -> usize {
        self.heads.len()
    }

    /// Most recent landmark block whose window hashed to `hash`'s bucket.
    #[inline]
    pub fn head(&self, hash: u32) -> Option<usize> {
        match self.heads[hash as usize % self.heads.len()] {
            0 => None,
            v => Some(v as usize - 1),
        }
    }

    /// Next older block on `block`'s collision chain.
    #[inline]
    pub fn next(&self, block: usize) -> Option<usize> {
        match self.chain[block] {
            0 => None,
            v => Some(v as usize - 1),
        }
    }
}
