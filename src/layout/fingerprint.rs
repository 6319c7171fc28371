use xxhash_rust::xxh3::Xxh3;

use crate::layout::packer::ColumnBucket;

const XXH3_SEED: u64 = 0x5f0c_a1d3_9e4b_7a21;

/// Stable 128-bit fingerprint of a packed layout.
///
/// Two layouts share a fingerprint when they have the same column count and the
/// same photos (source and aspect ratio bits) in the same column positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct LayoutFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl std::fmt::Display for LayoutFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Fingerprint a bucket set as produced by [`crate::pack_buckets`].
pub fn fingerprint_buckets(buckets: &[ColumnBucket]) -> LayoutFingerprint {
    let mut h = StableHasher::new();
    h.write_u32(buckets.len() as u32);
    for bucket in buckets {
        h.write_u32(bucket.photos.len() as u32);
        for photo in &bucket.photos {
            h.write_str(&photo.src);
            h.write_f64(photo.aspect_ratio);
        }
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        // Length prefix keeps ("ab", "c") distinct from ("a", "bc").
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> LayoutFingerprint {
        let v = self.inner.digest128();
        LayoutFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fingerprint.rs"]
mod tests;
