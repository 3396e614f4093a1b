use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Mapping from state to value estimate with an explicit default.
///
/// Looking up a state that was never written returns the table's default
/// (0.0 unless constructed with [`ValueTable::with_default`]) rather than
/// failing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S: Serialize + Eq + Hash",
    deserialize = "S: Deserialize<'de> + Eq + Hash"
))]
pub struct ValueTable<S: Eq + Hash> {
    values: HashMap<S, f64>,
    default: f64,
}

impl<S: Eq + Hash + Clone> ValueTable<S> {
    pub fn new() -> Self {
        Self::with_default(0.0)
    }

    pub fn with_default(default: f64) -> Self {
        ValueTable {
            values: HashMap::new(),
            default,
        }
    }

    /// An empty table sharing this table's default
    pub fn empty_like(&self) -> Self {
        Self::with_default(self.default)
    }

    /// Value of `state`, or the table default when absent
    pub fn get(&self, state: &S) -> f64 {
        self.get_or(state, self.default)
    }

    /// Value of `state`, or `default` when absent
    pub fn get_or(&self, state: &S, default: f64) -> f64 {
        self.values.get(state).copied().unwrap_or(default)
    }

    /// Overwrite one entry, returning the previous effective value
    pub fn set(&mut self, state: S, value: f64) -> f64 {
        self.values.insert(state, value).unwrap_or(self.default)
    }

    /// Replace every entry with those of `other`
    pub fn replace(&mut self, other: ValueTable<S>) {
        *self = other;
    }

    pub fn contains(&self, state: &S) -> bool {
        self.values.contains_key(state)
    }

    pub fn default_value(&self) -> f64 {
        self.default
    }

    /// Number of explicitly stored entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, f64)> {
        self.values.iter().map(|(s, &v)| (s, v))
    }
}

impl<S: Eq + Hash + Clone> Default for ValueTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Eq + Hash + Clone> FromIterator<(S, f64)> for ValueTable<S> {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut table = ValueTable::new();
        for (s, v) in iter {
            table.set(s, v);
        }
        table
    }
}
