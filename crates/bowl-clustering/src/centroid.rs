use super::*;
use bowl_core::KMEANS_POPULARITY_CUTOFF;
use bowl_features::Vector;

/// The value held by a live k-means slot.
///
/// Owns an independent copy of its feature snapshot, so pruning or
/// mutating document vectors never aliases into it. `cid` is the document
/// the slot still holds verbatim, and is blacklisted if the slot
/// degenerates. Relocating to an average clears it.
#[derive(Debug, Clone)]
pub struct Centroid {
    cid: Option<usize>,
    node: Node,
}

impl Centroid {
    /// Seed a slot from a document's vector.
    pub fn seed(metric: &Metric, position: usize, vector: Vector) -> Self {
        Self {
            cid: Some(position),
            node: metric.node(vector),
        }
    }
    pub fn cid(&self) -> Option<usize> {
        self.cid
    }
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Ceiling-rounded mean of the given vectors, without the features
    /// whose mean exceeds the popularity cutoff.
    pub fn average<'a, I>(vectors: I) -> Vector
    where
        I: IntoIterator<Item = &'a Vector>,
    {
        let mut mean = Vector::average(vectors);
        mean.retain(|_, count| count <= KMEANS_POPULARITY_CUTOFF);
        mean
    }

    /// Move the centroid to a new feature snapshot. The slot no longer
    /// holds its seed document afterwards.
    pub fn relocate(&mut self, metric: &Metric, vector: Vector) {
        self.cid = None;
        metric.revector(&mut self.node, vector);
    }
}
