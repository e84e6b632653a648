use super::*;
use bowl_core::Energy;
use bowl_core::KMEANS_DEFAULT_CENTROIDS;
use bowl_core::KMEANS_DEFAULT_ITERATIONS;
use bowl_core::KMEANS_DEFAULT_THRESHOLD;
use bowl_core::KMEANS_DEFAULT_WINDOW;
use bowl_core::KMEANS_DOCUMENTS_PER_CENTROID;
use bowl_core::Probability;
use bowl_features::Corpus;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Thresholded k-means over Pearson distance.
///
/// Unlike textbook k-means, a document only joins its nearest centroid
/// when the distance is below the admission ceiling `1 − threshold`.
/// Slots that end an iteration with at most one member are recycled:
/// a seed document they still hold is blacklisted and, while the
/// recentroid window is open, a random rejected document takes over the
/// slot. Documents left empty by pruning never seed a slot.
///
/// # Acceleration
///
/// With more than 30 slots, nearest-centroid search goes through
/// [`Groups`] of centroids, so a document is compared with the group
/// vectors and then with the slots of a single group.
///
/// # Termination
///
/// - The assignment map repeats itself (fixed point), or
/// - `t` iterations have run.
pub struct KMeans {
    k: usize,
    threshold: Probability,
    t: usize,
    window: usize,
    rng: SmallRng,
    iterations: usize,
}

impl Default for KMeans {
    fn default() -> Self {
        Self {
            k: KMEANS_DEFAULT_CENTROIDS,
            threshold: KMEANS_DEFAULT_THRESHOLD as Probability / 100.,
            t: KMEANS_DEFAULT_ITERATIONS,
            window: KMEANS_DEFAULT_WINDOW,
            rng: SmallRng::from_rng(&mut rand::rng()),
            iterations: 0,
        }
    }
}

impl KMeans {
    /// Reproducible instance with default settings.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            ..Self::default()
        }
    }

    /// requested number of centroids, before capping
    pub fn k(&self) -> usize {
        self.k
    }
    /// membership threshold as a fraction
    pub fn threshold(&self) -> Probability {
        self.threshold
    }
    /// admission ceiling on distance
    pub fn ceiling(&self) -> Energy {
        1. - self.threshold
    }
    /// maximum number of iterations
    pub fn t(&self) -> usize {
        self.t
    }
    /// iterations during which rejected documents may re-seed slots
    pub fn window(&self) -> usize {
        self.window
    }
    /// iterations performed by the most recent run
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn set_centroids(&mut self, k: usize) -> anyhow::Result<()> {
        anyhow::ensure!(k > 0, "centroid count must be positive");
        self.k = k;
        Ok(())
    }
    pub fn set_threshold(&mut self, percent: usize) -> anyhow::Result<()> {
        anyhow::ensure!(
            (1..=100).contains(&percent),
            "membership threshold must be within 1..=100, got {}",
            percent
        );
        self.threshold = percent as Probability / 100.;
        Ok(())
    }
    pub fn set_iterations(&mut self, t: usize) -> anyhow::Result<()> {
        anyhow::ensure!(t > 0, "iteration count must be positive");
        self.t = t;
        Ok(())
    }
    pub fn set_window(&mut self, window: usize) {
        self.window = window;
    }
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }
}

impl KMeans {
    /// Centroid count for a corpus of `n` documents:
    /// at most ⌈n/3⌉ − 1, but never less than one.
    fn capped(&self, n: usize) -> usize {
        let cap = n
            .div_ceil(KMEANS_DOCUMENTS_PER_CENTROID)
            .saturating_sub(1)
            .max(1);
        if self.k > cap {
            log::info!("{:<32}{:<16}{:<16}", "capping centroids", self.k, cap);
            cap
        } else {
            self.k
        }
    }

    /// Seed every slot with a distinct random document. Documents emptied
    /// by pruning are never seeds, so there may be fewer than `k` slots.
    fn init(&mut self, metric: &Metric, nodes: &[Node], k: usize) -> Vec<Option<Centroid>> {
        let eligible = (0..nodes.len())
            .filter(|&i| !nodes[i].vector().is_empty())
            .collect::<Vec<usize>>();
        if eligible.len() < k {
            log::info!("{:<32}{:<16}{:<16}", "too few seedable documents", k, eligible.len());
        }
        rand::seq::index::sample(&mut self.rng, eligible.len(), k.min(eligible.len()))
            .into_iter()
            .map(|e| eligible[e])
            .map(|i| Some(Centroid::seed(metric, i, nodes[i].vector().clone())))
            .collect()
    }

    /// Assign every document to its nearest live slot under the ceiling.
    /// Also returns the rejected, non-empty documents that may re-seed slots.
    fn assign(
        &self,
        metric: &Metric,
        nodes: &[Node],
        slots: &[Option<Centroid>],
        groups: &Groups,
        t: usize,
        blacklist: &BTreeSet<usize>,
    ) -> (Assignment, Vec<usize>) {
        let ceiling = self.ceiling();
        let neighbors = nodes
            .par_iter()
            .map(|x| groups.neighbor(metric, slots, x))
            .collect::<Vec<Option<(usize, Energy)>>>();
        let mut assignment = Assignment::new(slots.len());
        let mut candidates = Vec::new();
        for (i, neighbor) in neighbors.into_iter().enumerate() {
            match neighbor {
                Some((s, d)) if d < ceiling => assignment.admit(s, i, d),
                _ if t < self.window
                    && !blacklist.contains(&i)
                    && !nodes[i].vector().is_empty() =>
                {
                    candidates.push(i)
                }
                _ => {}
            }
        }
        (assignment, candidates)
    }

    /// Recycle degenerate slots and move the others to their members' mean.
    fn maintain(
        &mut self,
        metric: &Metric,
        nodes: &[Node],
        slots: &mut [Option<Centroid>],
        assignment: &Assignment,
        mut candidates: Vec<usize>,
        blacklist: &mut BTreeSet<usize>,
    ) {
        for (s, slot) in slots.iter_mut().enumerate() {
            let members = assignment.members(s);
            if members.len() <= 1 {
                if let Some(cid) = slot.as_ref().and_then(Centroid::cid) {
                    blacklist.insert(cid);
                }
                *slot = self
                    .recruit(&mut candidates, blacklist)
                    .map(|i| Centroid::seed(metric, i, nodes[i].vector().clone()));
                continue;
            }
            let mean = Centroid::average(members.iter().map(|&(i, _)| nodes[i].vector()));
            match slot {
                Some(centroid) if !mean.is_empty() => centroid.relocate(metric, mean),
                _ => {
                    log::debug!("{:<32}{:<16}", "freeing emptied centroid", s);
                    *slot = None;
                }
            }
        }
    }

    /// Take a random candidate that was never blacklisted.
    fn recruit(&mut self, candidates: &mut Vec<usize>, blacklist: &BTreeSet<usize>) -> Option<usize> {
        candidates.retain(|i| !blacklist.contains(i));
        if candidates.is_empty() {
            None
        } else {
            let r = self.rng.random_range(0..candidates.len());
            Some(candidates.swap_remove(r))
        }
    }

    /// Clusters of every live slot holding more than one document.
    fn extract(
        corpus: &Corpus,
        slots: &[Option<Centroid>],
        assignment: &Assignment,
        iterations: usize,
    ) -> Clusters {
        let clusters = slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(s, _)| assignment.members(s))
            .filter(|members| members.len() > 1)
            .map(|members| {
                members
                    .iter()
                    .map(|&(i, score)| {
                        let document = corpus.document(i);
                        let membership = Membership {
                            text: document.text().to_string(),
                            score,
                        };
                        (document.id().to_string(), membership)
                    })
                    .collect::<BTreeMap<String, Membership>>()
            })
            .collect::<Vec<_>>();
        Clusters::new(clusters, iterations)
    }
}

impl Cluster for KMeans {
    type Output = Clusters;
    fn cluster(&mut self, corpus: &Corpus, metric: &Metric, nodes: Vec<Node>) -> Self::Output {
        let k = self.capped(nodes.len());
        log::info!("{:<32}{:<16}{:<16}", "kmeans initializing", nodes.len(), k);
        let mut slots = self.init(metric, &nodes, k);
        let mut blacklist = BTreeSet::new();
        let mut last = None::<Assignment>;
        self.iterations = 0;
        for t in 0..self.t {
            self.iterations = t + 1;
            let groups = Groups::build(metric, &slots, &mut self.rng);
            let (assignment, candidates) =
                self.assign(metric, &nodes, &slots, &groups, t, &blacklist);
            log::debug!(
                "{:<32}{:<8}{:<8}{:<8}",
                "kmeans iterating",
                t,
                assignment.admitted(),
                candidates.len()
            );
            if last.as_ref() == Some(&assignment) {
                log::info!("{:<32}{:<16}", "kmeans converged", self.iterations);
                break;
            }
            self.maintain(metric, &nodes, &mut slots, &assignment, candidates, &mut blacklist);
            last = Some(assignment);
        }
        log::info!(
            "{:<32}{:<16}{:<16}",
            "kmeans finished",
            self.iterations,
            slots.iter().flatten().count()
        );
        let ref assignment = last.unwrap_or_else(|| Assignment::new(slots.len()));
        Self::extract(corpus, &slots, assignment, self.iterations)
    }
}
