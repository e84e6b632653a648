//! Agglomerative pair merging.
use super::*;
use bowl_core::DISTANCE_CEILING;
use bowl_core::Energy;
use bowl_features::Corpus;
use rayon::prelude::*;

/// Agglomerative clustering into a [`Dendrogram`].
///
/// Each round scans every unordered pair of active trees and merges the
/// pair with the *greatest* distance value. The work counter starts at the
/// node count and drops by two per merge; rounds continue while it is at
/// least one, so a run usually ends with more than one root.
///
/// # Consistency
///
/// Every computed distance must fall inside `[0, 1.001]`. Anything else
/// means the cached statistics disagree with the vectors, and the run
/// panics.
#[derive(Debug, Default, Clone, Copy)]
pub struct Agglomerative;

type Pair = (usize, usize, Energy);

impl Agglomerative {
    /// The pair with the greatest distance; ties go to the first pair in
    /// `(i, j)` scan order.
    pub fn farthest(metric: &Metric, trees: &[Dendrogram]) -> Option<Pair> {
        let n = trees.len();
        (0..n)
            .into_par_iter()
            .flat_map_iter(|i| (i + 1..n).map(move |j| (i, j)))
            .map(|(i, j)| (i, j, metric.distance(trees[i].node(), trees[j].node())))
            .inspect(|&(i, j, d)| Self::check(i, j, d))
            .reduce_with(Self::wider)
    }

    fn check(i: usize, j: usize, d: Energy) {
        assert!(
            (0. ..=DISTANCE_CEILING).contains(&d),
            "distance between {} and {} out of range: {}",
            i,
            j,
            d
        );
    }

    fn wider(a: Pair, b: Pair) -> Pair {
        if b.2 > a.2 || (b.2 == a.2 && (b.0, b.1) < (a.0, a.1)) {
            b
        } else {
            a
        }
    }

    /// Merge rounds until the work counter runs out.
    pub fn grow(metric: &Metric, mut trees: Vec<Dendrogram>) -> Vec<Dendrogram> {
        let mut remaining = trees.len() as isize;
        while remaining >= 1 && trees.len() >= 2 {
            let Some((i, j, distance)) = Self::farthest(metric, &trees) else {
                break;
            };
            // j > i, so removing j first keeps i in place
            let right = trees.remove(j);
            let left = trees.remove(i);
            log::debug!(
                "{:<32}{:<8.4}{:?} {:?}",
                "merging",
                distance,
                left.ids(),
                right.ids()
            );
            trees.push(Dendrogram::merge(metric, left, right, distance));
            remaining -= 2;
        }
        trees
    }
}

impl Cluster for Agglomerative {
    type Output = Vec<Dendrogram>;
    fn cluster(&mut self, corpus: &Corpus, metric: &Metric, nodes: Vec<Node>) -> Self::Output {
        let leaves = corpus
            .documents()
            .iter()
            .zip(nodes)
            .map(|(d, node)| Dendrogram::leaf(d.id().to_string(), node))
            .collect::<Vec<_>>();
        log::info!("{:<32}{:<32}", "agglomerating leaves", leaves.len());
        let roots = Self::grow(metric, leaves);
        log::info!("{:<32}{:<32}", "agglomerated roots", roots.len());
        roots
    }
}
