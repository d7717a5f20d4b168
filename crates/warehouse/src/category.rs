//! Interned, case-normalized category labels.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use warekeep_core::ValueObject;

/// Product grouping label, case-normalized and interned.
///
/// Two categories with the same normalized name are the same identity: the
/// interner hands out handles that share one backing allocation, and equality
/// and hashing are structural on the normalized name. A `Category` is never
/// mutated after creation and outlives any product that references it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category {
    name: Arc<str>,
}

impl Category {
    fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name),
        }
    }

    /// The stored normalized name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ValueObject for Category {}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Capitalize the first letter and lowercase the rest. The empty string
/// passes through unchanged.
fn normalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
    }
}

/// Cache of [`Category`] handles, keyed by normalized name.
///
/// Explicitly constructed and owned by the caller rather than hidden behind a
/// static, so tests get isolation by building a fresh interner. Interned
/// entries live as long as the interner itself.
///
/// ## Thread safety
///
/// The interior lock strengthens the single-threaded source design so `&self`
/// interning can be shared across threads.
#[derive(Debug, Default)]
pub struct CategoryInterner {
    cache: RwLock<HashMap<String, Category>>,
}

impl CategoryInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached category for the normalized form of `name`, creating
    /// and caching it if absent.
    pub fn of(&self, name: &str) -> Category {
        let normalized = normalize(name);

        if let Some(category) = self.cache.read().unwrap().get(&normalized) {
            return category.clone();
        }

        let mut cache = self.cache.write().unwrap();
        // Re-check under the write lock: another caller may have interned the
        // name between the two lock acquisitions.
        cache
            .entry(normalized)
            .or_insert_with_key(|key| {
                tracing::debug!(category = %key, "interned new category");
                Category::new(key)
            })
            .clone()
    }

    /// Number of distinct normalized names interned so far.
    pub fn len(&self) -> usize {
        self.cache.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
