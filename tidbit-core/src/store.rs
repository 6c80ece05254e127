//! Fact storage and no-repeat rotation.
//!
//! Each category merges two sources: the immutable built-in set and an
//! append-only user set. Selection is no-repeat-until-exhausted: a shuffled
//! queue of the facts not yet shown this cycle is popped one value per call
//! and refilled (reshuffled) once it runs dry.
//!
//! Rotation tracks facts **by value**, not by position. Two positions holding
//! identical text count as one rotation entry, so duplicate source data never
//! produces a visible repeat within a cycle.

use std::collections::{HashMap, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::facts;

/// Error type for fact storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("facts must be non-empty strings (entry {index} is empty)")]
    EmptyFact { index: usize },
}

/// Category-keyed fact storage with no-repeat rotation state.
#[derive(Debug, Clone)]
pub struct FactStore {
    /// Built-in facts, never mutated after construction.
    builtin: HashMap<String, Vec<String>>,
    /// User-added facts, append-only.
    user: HashMap<String, Vec<String>>,
    /// Distinct fact values not yet shown this cycle, shuffled, per category.
    rotation: HashMap<String, Vec<String>>,
}

impl Default for FactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FactStore {
    /// Create a store seeded with the built-in fact database.
    pub fn new() -> Self {
        let builtin = facts::BUILTIN
            .iter()
            .map(|(category, list)| {
                let list = list.iter().map(|fact| (*fact).to_string()).collect();
                ((*category).to_string(), list)
            })
            .collect();

        Self {
            builtin,
            user: HashMap::new(),
            rotation: HashMap::new(),
        }
    }

    /// Append facts to a category's user list, creating the category if absent.
    ///
    /// Every entry must be non-empty (whitespace-only counts as empty);
    /// otherwise nothing is appended and [`StoreError::EmptyFact`] names the
    /// first offending entry. An empty iterator is an accepted no-op.
    ///
    /// Rotation history is not reset: values already shown this cycle stay
    /// shown, but genuinely new values are spliced into the current cycle at
    /// random positions so they become eligible immediately.
    pub fn add_facts<I, S>(&mut self, category: &str, new_facts: I) -> Result<(), StoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let new_facts: Vec<String> = new_facts.into_iter().map(Into::into).collect();
        if let Some(index) = new_facts.iter().position(|fact| fact.trim().is_empty()) {
            return Err(StoreError::EmptyFact { index });
        }
        if new_facts.is_empty() {
            return Ok(());
        }

        // Values the pool has never held join the in-progress cycle.
        let mut fresh: Vec<String> = Vec::new();
        for fact in &new_facts {
            if !self.pool_contains(category, fact) && !fresh.contains(fact) {
                fresh.push(fact.clone());
            }
        }
        if let Some(remaining) = self.rotation.get_mut(category) {
            let mut rng = rand::thread_rng();
            for fact in fresh {
                let at = rng.gen_range(0..=remaining.len());
                remaining.insert(at, fact);
            }
        }

        self.user
            .entry(category.to_string())
            .or_default()
            .extend(new_facts);
        Ok(())
    }

    /// Draw the next fact in the category's rotation.
    ///
    /// Returns `None` when the merged pool is empty. This is a normal
    /// condition ("nothing to display"), not a fault. When the cycle is
    /// exhausted the queue refills with every distinct value, reshuffled.
    pub fn get_random_fact(&mut self, category: &str) -> Option<String> {
        let needs_refill = self.rotation.get(category).map_or(true, Vec::is_empty);
        if needs_refill {
            let mut pool = self.distinct_values(category);
            if pool.is_empty() {
                return None;
            }
            pool.shuffle(&mut rand::thread_rng());
            self.rotation.insert(category.to_string(), pool);
        }
        self.rotation.get_mut(category).and_then(Vec::pop)
    }

    /// All category names: union of built-in and user categories, sorted.
    pub fn get_categories(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .builtin
            .keys()
            .chain(self.user.keys())
            .cloned()
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Merged fact count for a category, by position (duplicates counted).
    /// 0 for unknown categories.
    pub fn get_fact_count(&self, category: &str) -> usize {
        let builtin = self.builtin.get(category).map_or(0, Vec::len);
        let user = self.user.get(category).map_or(0, Vec::len);
        builtin + user
    }

    /// Size of the category's rotation pool (distinct values).
    pub fn distinct_fact_count(&self, category: &str) -> usize {
        self.distinct_values(category).len()
    }

    /// Forget the category's rotation history. Afterwards the category is
    /// indistinguishable from one never drawn from: the next draw refills
    /// from the full pool, and facts added before that draw enter on equal
    /// footing with the pre-existing ones.
    pub fn clear_used_facts(&mut self, category: &str) {
        self.rotation.remove(category);
    }

    /// Whether the merged pool already holds this value.
    fn pool_contains(&self, category: &str, fact: &str) -> bool {
        let builtin = self.builtin.get(category).into_iter().flatten();
        let user = self.user.get(category).into_iter().flatten();
        builtin.chain(user).any(|existing| existing == fact)
    }

    /// Distinct fact values for a category, built-in first, first-seen order.
    fn distinct_values(&self, category: &str) -> Vec<String> {
        let builtin = self.builtin.get(category).into_iter().flatten();
        let user = self.user.get(category).into_iter().flatten();

        let mut seen: HashSet<&str> = HashSet::new();
        let mut values = Vec::new();
        for fact in builtin.chain(user) {
            if seen.insert(fact.as_str()) {
                values.push(fact.clone());
            }
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initializes_with_builtin_categories() {
        let store = FactStore::new();
        let categories = store.get_categories();
        assert!(categories.contains(&"general".to_string()));
        assert!(categories.contains(&"science".to_string()));
        assert!(categories.contains(&"tech".to_string()));
    }

    #[test]
    fn test_no_repeat_until_exhausted() {
        let mut store = FactStore::new();
        let total = store.distinct_fact_count("general");
        assert!(total > 0);

        let mut seen = HashSet::new();
        for _ in 0..total {
            let fact = store.get_random_fact("general").unwrap();
            assert!(!seen.contains(&fact), "repeated {fact:?} before exhaustion");
            seen.insert(fact);
        }

        // Cycle exhausted: the next draw repeats something already seen.
        let fact = store.get_random_fact("general").unwrap();
        assert!(seen.contains(&fact));
    }

    #[test]
    fn test_add_facts_creates_category() {
        let mut store = FactStore::new();
        store
            .add_facts("custom", ["Custom fact 1", "Custom fact 2"])
            .unwrap();
        assert_eq!(store.get_fact_count("custom"), 2);
        assert!(store.get_categories().contains(&"custom".to_string()));

        let fact = store.get_random_fact("custom").unwrap();
        assert!(fact.starts_with("Custom fact"));
    }

    #[test]
    fn test_add_facts_rejects_empty_entries() {
        let mut store = FactStore::new();
        let err = store
            .add_facts("custom", ["ok", "   ", "also ok"])
            .unwrap_err();
        assert!(matches!(err, StoreError::EmptyFact { index: 1 }));

        // All-or-nothing: nothing was appended.
        assert_eq!(store.get_fact_count("custom"), 0);
        assert!(store.get_random_fact("custom").is_none());
    }

    #[test]
    fn test_add_facts_empty_slice_is_noop() {
        let mut store = FactStore::new();
        store.add_facts("custom", Vec::<String>::new()).unwrap();
        assert_eq!(store.get_fact_count("custom"), 0);
    }

    #[test]
    fn test_unknown_category_yields_none() {
        let mut store = FactStore::new();
        assert!(store.get_random_fact("nonexistent").is_none());
        assert_eq!(store.get_fact_count("nonexistent"), 0);
    }

    #[test]
    fn test_duplicate_values_rotate_once() {
        let mut store = FactStore::new();
        store
            .add_facts("dup", ["same", "same", "other", "same"])
            .unwrap();
        assert_eq!(store.get_fact_count("dup"), 4);
        assert_eq!(store.distinct_fact_count("dup"), 2);

        let first = store.get_random_fact("dup").unwrap();
        let second = store.get_random_fact("dup").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_mid_cycle_add_is_eligible_before_refill() {
        let mut store = FactStore::new();
        store.add_facts("jobs", ["a", "b"]).unwrap();

        let first = store.get_random_fact("jobs").unwrap();
        store.add_facts("jobs", ["c"]).unwrap();

        // The remainder of this cycle must produce the other seed value and
        // the late addition, in some order, before anything repeats.
        let mut rest = vec![
            store.get_random_fact("jobs").unwrap(),
            store.get_random_fact("jobs").unwrap(),
        ];
        rest.push(first);
        rest.sort();
        assert_eq!(rest, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_re_adding_shown_value_does_not_resurface_it() {
        let mut store = FactStore::new();
        store.add_facts("jobs", ["a", "b"]).unwrap();

        let first = store.get_random_fact("jobs").unwrap();
        // Re-register the value that was just shown; it stays "shown".
        store.add_facts("jobs", [first.clone()]).unwrap();

        let second = store.get_random_fact("jobs").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_clear_then_add_treats_all_facts_as_unseen() {
        let mut store = FactStore::new();
        store.add_facts("jobs", ["a", "b", "c"]).unwrap();

        store.get_random_fact("jobs").unwrap();
        store.clear_used_facts("jobs");
        store.add_facts("jobs", ["d"]).unwrap();

        // One full cycle covers every value exactly once, old and new alike.
        let mut cycle = HashSet::new();
        for _ in 0..4 {
            assert!(cycle.insert(store.get_random_fact("jobs").unwrap()));
        }
        assert_eq!(cycle.len(), 4);
    }

    #[test]
    fn test_clear_used_facts_forgets_history() {
        let mut store = FactStore::new();
        store.add_facts("jobs", ["a", "b", "c"]).unwrap();

        let shown = store.get_random_fact("jobs").unwrap();
        store.clear_used_facts("jobs");

        // Draw a full cycle: the pre-clear fact must be reachable again.
        let mut cycle = HashSet::new();
        for _ in 0..3 {
            cycle.insert(store.get_random_fact("jobs").unwrap());
        }
        assert!(cycle.contains(&shown));
        assert_eq!(cycle.len(), 3);
    }
}
