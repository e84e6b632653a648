use super::*;
use bowl_core::Energy;
use serde::Serialize;

/// Binary merge tree produced by agglomerative clustering.
///
/// A branch owns both subtrees. Its node carries the elementwise sum of
/// the children's vectors and `distance` is the value that selected the
/// merge. Trees are immutable once built.
#[derive(Debug, Clone, Serialize)]
pub enum Dendrogram {
    Leaf {
        id: String,
        #[serde(skip)]
        node: Node,
    },
    Branch {
        distance: Energy,
        #[serde(skip)]
        node: Node,
        left: Box<Dendrogram>,
        right: Box<Dendrogram>,
    },
}

impl Dendrogram {
    pub fn leaf(id: String, node: Node) -> Self {
        Self::Leaf { id, node }
    }
    /// Join two trees under a new branch with summed features.
    pub fn merge(metric: &Metric, left: Self, right: Self, distance: Energy) -> Self {
        let mut vector = left.node().vector().clone();
        vector.absorb(right.node().vector());
        Self::Branch {
            distance,
            node: metric.node(vector),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn node(&self) -> &Node {
        match self {
            Self::Leaf { node, .. } => node,
            Self::Branch { node, .. } => node,
        }
    }
    /// merge value for branches, zero for leaves
    pub fn distance(&self) -> Energy {
        match self {
            Self::Leaf { .. } => 0.,
            Self::Branch { distance, .. } => *distance,
        }
    }
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Leaf { id, .. } => Some(id),
            Self::Branch { .. } => None,
        }
    }
    pub fn left(&self) -> Option<&Self> {
        match self {
            Self::Leaf { .. } => None,
            Self::Branch { left, .. } => Some(left),
        }
    }
    pub fn right(&self) -> Option<&Self> {
        match self {
            Self::Leaf { .. } => None,
            Self::Branch { right, .. } => Some(right),
        }
    }
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// leaf ids, left to right
    pub fn ids(&self) -> Vec<&str> {
        match self {
            Self::Leaf { id, .. } => vec![id.as_str()],
            Self::Branch { left, right, .. } => {
                let mut ids = left.ids();
                ids.extend(right.ids());
                ids
            }
        }
    }
    /// number of leaves
    pub fn size(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Branch { left, right, .. } => left.size() + right.size(),
        }
    }
    /// number of branch levels down to the deepest leaf
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Branch { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

impl std::fmt::Display for Dendrogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn draw(
            tree: &Dendrogram,
            depth: usize,
            f: &mut std::fmt::Formatter<'_>,
        ) -> std::fmt::Result {
            match tree {
                Dendrogram::Leaf { id, .. } => writeln!(f, "{:indent$}{}", "", id, indent = depth * 2),
                Dendrogram::Branch {
                    distance,
                    left,
                    right,
                    ..
                } => {
                    writeln!(f, "{:indent$}+ {:.4}", "", distance, indent = depth * 2)?;
                    draw(left, depth + 1, f)?;
                    draw(right, depth + 1, f)
                }
            }
        }
        draw(self, 0, f)
    }
}
