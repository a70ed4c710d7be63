//! A fixed-capacity map from `i64` keys to generic values, backed by a
//! fixed array of chained buckets. Capacity is set once at
//! construction (minimum 32) and never changes; there is no rehashing
//! and no load-factor management, so lookup cost tracks chain length.

pub mod long_map;

pub use crate::long_map::{InvalidCapacity, LongMap, MIN_CAPACITY};
