use bowl_core::Energy;
use bowl_features::Vector;
use serde::Serialize;

/// A clustering unit: an owned sparse vector plus the correlation
/// statistics derived from it.
///
/// `sum` is Σ counts and `den` is Σ counts² − sum² / N for the vocabulary
/// size N of the [`Metric`](crate::Metric) that built the node. Nodes are
/// only produced by a metric, so the cached values never go stale.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    vector: Vector,
    #[serde(skip)]
    sum: Energy,
    #[serde(skip)]
    den: Energy,
}

impl Node {
    pub(crate) fn new(vector: Vector, sum: Energy, den: Energy) -> Self {
        Self { vector, sum, den }
    }
    pub fn vector(&self) -> &Vector {
        &self.vector
    }
    pub fn sum(&self) -> Energy {
        self.sum
    }
    pub fn den(&self) -> Energy {
        self.den
    }
    pub fn into_vector(self) -> Vector {
        self.vector
    }
}
