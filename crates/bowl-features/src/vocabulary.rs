use serde::Serialize;
use std::collections::HashMap;

/// Per-term bookkeeping: stable index and document frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub index: usize,
    pub frequency: usize,
}

/// The growing term → index table shared by every vector of a corpus.
///
/// Indices are handed out monotonically and never reused, even after a term
/// is pruned, so vectors built earlier stay valid. The number of *live*
/// terms is the dimensionality used by correlation statistics.
/// Every mutation bumps [`Vocabulary::version`].
#[derive(Debug, Default, Clone, Serialize)]
pub struct Vocabulary {
    terms: HashMap<String, Entry>,
    next: usize,
    version: usize,
}

impl Vocabulary {
    /// number of live terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
    /// monotone counter bumped by every insertion or removal
    pub fn version(&self) -> usize {
        self.version
    }
    pub fn index(&self, term: &str) -> Option<usize> {
        self.terms.get(term).map(|e| e.index)
    }
    pub fn frequency(&self, term: &str) -> Option<usize> {
        self.terms.get(term).map(|e| e.frequency)
    }
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.terms.iter().map(|(t, e)| (t.as_str(), e))
    }

    /// index of the term, allocating the next one for unseen terms.
    /// does not touch document frequency.
    pub fn intern(&mut self, term: &str) -> usize {
        if let Some(entry) = self.terms.get(term) {
            return entry.index;
        }
        let index = self.next;
        self.next += 1;
        self.version += 1;
        self.terms.insert(
            term.to_string(),
            Entry {
                index,
                frequency: 0,
            },
        );
        index
    }
    /// record one more document containing the term
    pub fn witness(&mut self, term: &str) {
        if let Some(entry) = self.terms.get_mut(term) {
            entry.frequency += 1;
        }
    }
    /// drop a term, returning its index if it was live
    pub fn remove(&mut self, term: &str) -> Option<usize> {
        let entry = self.terms.remove(term)?;
        self.version += 1;
        Some(entry.index)
    }

    /// Terms whose document frequency reaches `threshold`,
    /// most frequent first (ties broken alphabetically).
    pub fn common(&self, threshold: f64) -> Vec<String> {
        let mut terms = self.terms.iter().collect::<Vec<_>>();
        terms.sort_by(|(t1, e1), (t2, e2)| e2.frequency.cmp(&e1.frequency).then(t1.cmp(t2)));
        terms
            .into_iter()
            .take_while(|(_, e)| e.frequency as f64 >= threshold)
            .map(|(t, _)| t.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_stable_and_never_reused() {
        let mut v = Vocabulary::default();
        assert_eq!(v.intern("apple"), 0);
        assert_eq!(v.intern("banana"), 1);
        assert_eq!(v.intern("apple"), 0);
        assert_eq!(v.remove("apple"), Some(0));
        assert_eq!(v.intern("cherry"), 2);
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn versions_move_on_mutation_only() {
        let mut v = Vocabulary::default();
        let v0 = v.version();
        v.intern("apple");
        let v1 = v.version();
        v.intern("apple");
        assert!(v1 > v0);
        assert_eq!(v.version(), v1);
        v.remove("apple");
        assert!(v.version() > v1);
    }

    #[test]
    fn common_terms_descend_by_frequency() {
        let mut v = Vocabulary::default();
        for (term, n) in [("rare", 1), ("often", 3), ("always", 4), ("some", 2)] {
            v.intern(term);
            (0..n).for_each(|_| v.witness(term));
        }
        assert_eq!(v.common(2.0), vec!["always", "often", "some"]);
        assert!(v.common(5.0).is_empty());
    }
}
