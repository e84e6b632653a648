use bowl_core::Energy;
use serde::Serialize;
use std::collections::BTreeMap;

/// A document's place in a cluster: its original text and the distance
/// to the centroid at the moment it was admitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Membership {
    pub text: String,
    pub score: Energy,
}

/// Result of a k-means run: clusters of document id → membership.
///
/// Only slots that were alive and held more than one document at the
/// final iteration appear here.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Clusters {
    clusters: Vec<BTreeMap<String, Membership>>,
    iterations: usize,
}

impl Clusters {
    pub fn new(clusters: Vec<BTreeMap<String, Membership>>, iterations: usize) -> Self {
        Self {
            clusters,
            iterations,
        }
    }
    pub fn len(&self) -> usize {
        self.clusters.len()
    }
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
    /// iterations performed by the run that produced these clusters
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    pub fn get(&self, i: usize) -> Option<&BTreeMap<String, Membership>> {
        self.clusters.get(i)
    }
    pub fn iter(&self) -> impl Iterator<Item = &BTreeMap<String, Membership>> {
        self.clusters.iter()
    }
    /// index of the cluster holding a document, if any
    pub fn cluster_of(&self, id: &str) -> Option<usize> {
        self.clusters.iter().position(|c| c.contains_key(id))
    }
}

impl IntoIterator for Clusters {
    type Item = BTreeMap<String, Membership>;
    type IntoIter = std::vec::IntoIter<Self::Item>;
    fn into_iter(self) -> Self::IntoIter {
        self.clusters.into_iter()
    }
}

impl std::fmt::Display for Clusters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, cluster) in self.clusters.iter().enumerate() {
            writeln!(f, "    * Cluster {}", i)?;
            for (id, member) in cluster.iter() {
                writeln!(f, "        * [[{}|{}]] ({:.4})", id, member.text, member.score)?;
            }
        }
        Ok(())
    }
}
