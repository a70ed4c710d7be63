/// One key/value pair in a chain. The key never changes once stored;
/// overwriting a key swaps in a whole new entry rather than mutating
/// this one.
#[derive(Debug, Clone)]
pub(crate) struct Entry<V> {
    pub key: i64,
    pub value: V,
}

/// An ordered chain of entries whose keys all hash to the same slot.
#[derive(Debug, Clone)]
pub(crate) struct Bucket<V> {
    entries: Vec<Entry<V>>,
}

impl<V> Bucket<V> {
    pub fn new() -> Bucket<V> {
        Bucket {
            entries: Vec::new(),
        }
    }

    /// Appends at the tail of the chain. The caller must have taken
    /// out any entry with the same key first.
    pub fn push(&mut self, key: i64, value: V) {
        self.entries.push(Entry { key, value });
    }

    pub fn find(&self, key: i64) -> Option<&V> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.value)
    }

    /// Removes the entry for `key`, preserving the relative order of
    /// the rest of the chain.
    pub fn take(&mut self, key: i64) -> Option<V> {
        let at = self.entries.iter().position(|e| e.key == key)?;
        Some(self.entries.remove(at).value)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &V)> {
        self.entries.iter().map(|e| (e.key, &e.value))
    }
}
