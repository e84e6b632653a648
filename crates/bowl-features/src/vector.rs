use bowl_core::Arbitrary;
use bowl_core::Count;
use bowl_core::Energy;
use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::AddAssign;

/// A sparse term-count vector over the shared vocabulary.
///
/// Keys are vocabulary indices, values are occurrence counts. Absent keys
/// are implicit zeros, so the vector is always read as if it spanned the
/// whole vocabulary.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Vector(BTreeMap<usize, Count>);

impl Vector {
    /// number of explicit (non-zero) entries
    pub fn n(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// count at a given index, zero if absent
    pub fn get(&self, index: usize) -> Count {
        self.0.get(&index).copied().unwrap_or(0)
    }
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains_key(&index)
    }
    pub fn iter(&self) -> impl Iterator<Item = (usize, Count)> + '_ {
        self.0.iter().map(|(&i, &c)| (i, c))
    }
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.keys().copied()
    }

    /// Σ counts
    pub fn sum(&self) -> Energy {
        self.0.values().map(|&c| c as Energy).sum()
    }
    /// Σ counts²
    pub fn squares(&self) -> Energy {
        self.0.values().map(|&c| c as Energy * c as Energy).sum()
    }
    /// dot product restricted to overlapping keys.
    /// walks the shorter vector and probes the longer one.
    pub fn dot(&self, other: &Self) -> Energy {
        let (min, max) = if self.n() > other.n() {
            (other, self)
        } else {
            (self, other)
        };
        min.0
            .iter()
            .filter_map(|(i, &a)| max.0.get(i).map(|&b| a as Energy * b as Energy))
            .sum()
    }

    /// increment the count at an index
    pub fn increment(mut self, index: usize, count: Count) -> Self {
        self.0.entry(index).or_insert(0).add_assign(count);
        self
    }
    /// elementwise sum of the other vector into this one.
    pub fn absorb(&mut self, other: &Self) {
        for (index, count) in other.0.iter() {
            self.0.entry(*index).or_insert(0).add_assign(*count);
        }
    }
    /// drop an index, returning whether it was present
    pub fn remove(&mut self, index: usize) -> bool {
        self.0.remove(&index).is_some()
    }
    /// keep only entries satisfying the predicate
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(usize, Count) -> bool,
    {
        self.0.retain(|&i, &mut c| keep(i, c));
    }

    /// elementwise mean of many vectors, rounded up.
    /// zero-valued results are omitted.
    pub fn average<'a, I>(vectors: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut n = 0 as Count;
        let mut total = Self::default();
        for vector in vectors {
            total.absorb(vector);
            n += 1;
        }
        if n == 0 {
            return total;
        }
        total.0.values_mut().for_each(|c| *c = c.div_ceil(n));
        total.0.retain(|_, c| *c > 0);
        total
    }
}

impl From<BTreeMap<usize, Count>> for Vector {
    fn from(counts: BTreeMap<usize, Count>) -> Self {
        Self(counts.into_iter().filter(|(_, c)| *c > 0).collect())
    }
}

impl FromIterator<(usize, Count)> for Vector {
    fn from_iter<I: IntoIterator<Item = (usize, Count)>>(iter: I) -> Self {
        iter.into_iter()
            .filter(|(_, c)| *c > 0)
            .fold(Self::default(), |v, (i, c)| v.increment(i, c))
    }
}

impl Arbitrary for Vector {
    fn random() -> Self {
        use rand::Rng;
        const D: usize = 64;
        const N: usize = 12;
        let ref mut rng = rand::rng();
        (0..rng.random_range(2..=N))
            .map(|_| (rng.random_range(0..D), rng.random_range(1..=3)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(pairs: &[(usize, Count)]) -> Vector {
        pairs.iter().copied().collect()
    }

    #[test]
    fn absorb_sums_overlapping_entries() {
        let mut a = v(&[(0, 1), (2, 3)]);
        a.absorb(&v(&[(2, 1), (5, 4)]));
        assert_eq!(a, v(&[(0, 1), (2, 4), (5, 4)]));
    }

    #[test]
    fn dot_only_counts_shared_keys() {
        let a = v(&[(0, 2), (1, 1), (7, 5)]);
        let b = v(&[(1, 3), (7, 2)]);
        assert_eq!(a.dot(&b), 13.0);
        assert_eq!(b.dot(&a), 13.0);
        assert_eq!(a.dot(&v(&[(9, 9)])), 0.0);
    }

    #[test]
    fn average_rounds_up() {
        let a = v(&[(0, 1), (1, 3)]);
        let b = v(&[(0, 1), (2, 1)]);
        let avg = Vector::average([&a, &b]);
        assert_eq!(avg, v(&[(0, 1), (1, 2), (2, 1)]));
    }

    #[test]
    fn average_of_nothing_is_empty() {
        assert!(Vector::average(std::iter::empty()).is_empty());
    }

    #[test]
    fn statistics() {
        let a = v(&[(3, 2), (4, 1)]);
        assert_eq!(a.sum(), 3.0);
        assert_eq!(a.squares(), 5.0);
        assert_eq!(a.get(3), 2);
        assert_eq!(a.get(9), 0);
    }

    #[test]
    fn zero_counts_are_not_stored() {
        let a = v(&[(0, 0), (1, 1)]);
        assert_eq!(a.n(), 1);
        assert!(!a.contains(0));
    }
}
