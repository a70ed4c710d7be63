use thiserror::Error;
use tracing::Level;

use crate::long_map::bucket::Bucket;

mod bucket;

/// The smallest bucket count a map will ever have. Construction floors
/// smaller requests to this instead of honoring them.
pub const MIN_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("capacity cannot be less than 1, requested {requested}")]
pub struct InvalidCapacity {
    pub requested: i64,
}

/// A fixed-capacity map from `i64` keys to values of type `V`.
///
/// Collisions are resolved by chaining: a key hashes to one of
/// `capacity` slots and lives in that slot's chain. The bucket array
/// never grows and a key's slot never changes, so callers should size
/// the capacity to their expected key count to keep chains short.
///
/// Not synchronized. Wrap it in a lock for shared use.
#[derive(Debug, Clone)]
pub struct LongMap<V> {
    buckets: Box<[Option<Bucket<V>>]>,
    len: usize,
}

fn empty_buckets<V>(capacity: usize) -> Box<[Option<Bucket<V>>]> {
    (0..capacity).map(|_| None).collect()
}

impl<V> Default for LongMap<V> {
    fn default() -> LongMap<V> {
        LongMap::new()
    }
}

impl<V> LongMap<V> {
    /// A map with the minimum capacity of 32 buckets.
    pub fn new() -> LongMap<V> {
        LongMap {
            buckets: empty_buckets(MIN_CAPACITY),
            len: 0,
        }
    }

    /// A map with `requested` buckets. Requests below 1 are an error;
    /// requests below [`MIN_CAPACITY`] are floored to it.
    pub fn with_capacity(requested: i64) -> Result<LongMap<V>, InvalidCapacity> {
        if requested < 1 {
            return Err(InvalidCapacity { requested });
        }
        let capacity = (requested as usize).max(MIN_CAPACITY);
        Ok(LongMap {
            buckets: empty_buckets(capacity),
            len: 0,
        })
    }

    // Absolute remainder. unsigned_abs keeps this total over all of
    // i64: i64::MIN has no positive abs, but its remainder always does.
    fn bucket_index(&self, key: i64) -> usize {
        (key % self.buckets.len() as i64).unsigned_abs() as usize
    }

    /// Inserts `value` under `key`, returning the value it displaced
    /// if the key was already present. Replacement removes the old
    /// entry and appends the new one at the tail of its chain, so the
    /// key's position within the chain changes. Never fails.
    pub fn insert(&mut self, key: i64, value: V) -> Option<V> {
        let at = self.bucket_index(key);
        let bucket = self.buckets[at].get_or_insert_with(Bucket::new);
        let displaced = bucket.take(key);
        if displaced.is_some() {
            self.len -= 1;
            tracing::event!(Level::TRACE, key, "replacing existing entry");
        }
        bucket.push(key, value);
        self.len += 1;
        displaced
    }

    pub fn get(&self, key: i64) -> Option<&V> {
        self.buckets[self.bucket_index(key)].as_ref()?.find(key)
    }

    /// Removes the entry for `key` and returns its value. A chain that
    /// becomes empty gives its slot back.
    pub fn remove(&mut self, key: i64) -> Option<V> {
        let at = self.bucket_index(key);
        let bucket = self.buckets[at].as_mut()?;
        let removed = bucket.take(key)?;
        self.len -= 1;
        if bucket.is_empty() {
            self.buckets[at] = None;
        }
        Some(removed)
    }

    pub fn contains_key(&self, key: i64) -> bool {
        if self.len == 0 {
            return false;
        }
        self.get(key).is_some()
    }

    /// Every live entry in bucket-index order, insertion order within
    /// each chain.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &V)> {
        self.buckets.iter().flatten().flat_map(|b| b.iter())
    }

    /// Every live key, in [`iter`](LongMap::iter) order, or `None` for
    /// an empty map. The length always equals [`len`](LongMap::len).
    pub fn keys(&self) -> Option<Vec<i64>> {
        if self.len == 0 {
            return None;
        }
        Some(self.iter().map(|(k, _)| k).collect())
    }

    /// Every live value, in [`iter`](LongMap::iter) order, or `None`
    /// for an empty map.
    pub fn values(&self) -> Option<Vec<&V>> {
        if self.len == 0 {
            return None;
        }
        Some(self.iter().map(|(_, v)| v).collect())
    }

    /// Drops every entry and chain. Capacity is unaffected.
    pub fn clear(&mut self) {
        tracing::event!(Level::TRACE, entries = self.len, "clearing map");
        for slot in self.buckets.iter_mut() {
            *slot = None;
        }
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The fixed bucket count set at construction.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }
}

impl<V: PartialEq> LongMap<V> {
    /// Whether any live entry's value equals `value`. Scans every
    /// chain, stopping at the first match; an empty map is never
    /// scanned. Equality is plain `PartialEq`, so with `V = Option<T>`
    /// a stored `None` matches `&None` and never matches a `Some`.
    pub fn contains_value(&self, value: &V) -> bool {
        if self.len == 0 {
            return false;
        }
        self.iter().any(|(_, v)| v == value)
    }
}
