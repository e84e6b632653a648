use super::*;
use bowl_core::Energy;
use bowl_core::KMEANS_META_CENTROIDS;
use rand::Rng;

/// A representative's share of the live slots.
///
/// `node` is the averaged vector of the member centroids. It is absent
/// when there is only one group and search degenerates to a full scan.
#[derive(Debug, Clone)]
pub struct Group {
    node: Option<Node>,
    slots: Vec<usize>,
}

impl Group {
    pub fn node(&self) -> Option<&Node> {
        self.node.as_ref()
    }
    pub fn slots(&self) -> &[usize] {
        &self.slots
    }
}

/// Centroids of centroids, for two-level nearest-centroid search.
///
/// With more than [`KMEANS_META_CENTROIDS`] slots, up to that many live
/// slots are sampled as representatives and every live slot joins its
/// nearest representative. A document then compares against the group vectors
/// first and only scans the slots of the winning group.
#[derive(Debug, Clone, Default)]
pub struct Groups(Vec<Group>);

impl Groups {
    pub fn build<R: Rng>(metric: &Metric, slots: &[Option<Centroid>], rng: &mut R) -> Self {
        let live = slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|_| i))
            .collect::<Vec<usize>>();
        if slots.len() <= KMEANS_META_CENTROIDS {
            return Self(vec![Group {
                node: None,
                slots: live,
            }]);
        }
        let centroid = move |s: usize| slots[s].as_ref().expect("live slot");
        let amount = live.len().min(KMEANS_META_CENTROIDS);
        let representatives = rand::seq::index::sample(rng, live.len(), amount)
            .into_iter()
            .map(|i| live[i])
            .collect::<Vec<usize>>();
        let mut members = vec![Vec::new(); representatives.len()];
        for &s in live.iter() {
            let ref x = centroid(s).node();
            let (r, _) = nearest(
                representatives
                    .iter()
                    .enumerate()
                    .map(|(r, &rep)| (r, metric.distance(centroid(rep).node(), x))),
            )
            .expect("at least one representative");
            members[r].push(s);
        }
        let groups = representatives
            .into_iter()
            .zip(members)
            .filter(|(_, members)| !members.is_empty())
            .map(|(rep, members)| {
                let vector = Centroid::average(members.iter().map(|&s| centroid(s).node().vector()));
                let vector = if vector.is_empty() {
                    centroid(rep).node().vector().clone()
                } else {
                    vector
                };
                Group {
                    node: Some(metric.node(vector)),
                    slots: members,
                }
            })
            .collect::<Vec<Group>>();
        log::debug!("{:<32}{:<16}{:<16}", "grouped centroids", live.len(), groups.len());
        Self(groups)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.0.iter()
    }

    /// The group a node should search in.
    pub fn group(&self, metric: &Metric, x: &Node) -> Option<&Group> {
        match self.0.as_slice() {
            [] => None,
            [only] => Some(only),
            groups => nearest(
                groups
                    .iter()
                    .enumerate()
                    .filter_map(|(g, group)| group.node().map(|n| (g, metric.distance(n, x)))),
            )
            .map(|(g, _)| &groups[g]),
        }
    }

    /// Nearest live slot and its distance, searching the nearest group only.
    pub fn neighbor(
        &self,
        metric: &Metric,
        slots: &[Option<Centroid>],
        x: &Node,
    ) -> Option<(usize, Energy)> {
        let group = self.group(metric, x)?;
        nearest(group.slots().iter().filter_map(|&s| {
            slots[s]
                .as_ref()
                .map(|c| (s, metric.distance(c.node(), x)))
        }))
    }
}

/// Smallest distance, first index on ties.
pub fn nearest<I>(candidates: I) -> Option<(usize, Energy)>
where
    I: IntoIterator<Item = (usize, Energy)>,
{
    candidates.into_iter().fold(None, |best, (i, d)| match best {
        Some((_, b)) if b <= d => best,
        _ => Some((i, d)),
    })
}
