use super::*;
use bowl_features::Corpus;

/// A clustering algorithm over an indexed corpus.
///
/// Implementors only describe what to do with initialized nodes.
/// [`Cluster::run`] owns the shared preamble: frequency pruning,
/// the vocabulary snapshot, and node construction.
pub trait Cluster {
    type Output: Default;

    /// Cluster nodes positioned like `corpus.documents()`.
    fn cluster(&mut self, corpus: &Corpus, metric: &Metric, nodes: Vec<Node>) -> Self::Output;

    /// Prune common terms, snapshot the vocabulary, build one node per
    /// document, and cluster. Nodes are rebuilt on every call.
    fn run(&mut self, corpus: &mut Corpus) -> Self::Output {
        let pruned = corpus.prune();
        log::info!(
            "{:<32}{:<16}{:<16}{:<16}",
            "clustering corpus",
            corpus.len(),
            corpus.vocabulary().len(),
            pruned.len()
        );
        if corpus.is_empty() || corpus.vocabulary().is_empty() {
            log::warn!("nothing to cluster");
            return Self::Output::default();
        }
        let ref metric = Metric::from(corpus.vocabulary());
        let nodes = corpus
            .documents()
            .iter()
            .map(|d| metric.node(d.vector().clone()))
            .collect::<Vec<Node>>();
        self.cluster(corpus, metric, nodes)
    }
}
