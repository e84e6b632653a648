use super::*;
use bowl_core::Energy;
use bowl_features::Vector;
use bowl_features::Vocabulary;

/// Pearson-correlation distance over a fixed vocabulary snapshot.
///
/// Vectors are sparse, but correlation is taken as if every vector spanned
/// all N live terms with implicit zeros. N is frozen when the metric is
/// built, so every node of one clustering run shares it.
///
/// # Distance
///
/// `1 − (dot − sumA·sumB/N) / sqrt(denA·denB)`, or `0` when the
/// denominator vanishes. Symmetric, zero on the diagonal, and nominally in
/// `[0, 2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    n: usize,
    version: usize,
}

impl Metric {
    pub fn new(n: usize, version: usize) -> Self {
        Self { n, version }
    }
    /// vocabulary size every statistic is computed against
    pub fn n(&self) -> usize {
        self.n
    }
    /// vocabulary version this snapshot was taken from
    pub fn version(&self) -> usize {
        self.version
    }

    /// Wrap a vector into a node with fresh statistics.
    pub fn node(&self, vector: Vector) -> Node {
        assert!(self.n > 0, "metric over an empty vocabulary");
        let n = self.n as Energy;
        let sum = vector.sum();
        let den = (vector.squares() - sum * sum / n).max(0.);
        Node::new(vector, sum, den)
    }
    /// Replace a node's vector, recomputing its statistics.
    pub fn revector(&self, node: &mut Node, vector: Vector) {
        *node = self.node(vector);
    }

    pub fn distance(&self, a: &Node, b: &Node) -> Energy {
        let n = self.n as Energy;
        let num = a.vector().dot(b.vector()) - a.sum() * b.sum() / n;
        let den = (a.den() * b.den()).sqrt();
        if den == 0. { 0. } else { 1. - num / den }
    }
}

impl From<&Vocabulary> for Metric {
    fn from(vocabulary: &Vocabulary) -> Self {
        Self::new(vocabulary.len(), vocabulary.version())
    }
}
