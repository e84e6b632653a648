//! Pearson-correlation clustering of short texts.
//!
//! Documents indexed by `bowl-features` are turned into [`Node`]s that cache
//! the statistics needed for a centered correlation over the whole
//! vocabulary. Two clusterers consume them.
//!
//! ## Pipeline
//!
//! 1. **Prune** — Drop terms above the corpus document-frequency cutoff
//! 2. **Initialize** — Snapshot the vocabulary into a [`Metric`], build nodes
//! 3. **Cluster** — Run [`Agglomerative`] or [`KMeans`]
//!
//! ## Core Types
//!
//! - [`Metric`] — Pearson distance over a fixed vocabulary snapshot
//! - [`Node`] — Sparse vector plus cached sum and denominator
//! - [`Dendrogram`] — Binary merge tree produced by [`Agglomerative`]
//! - [`Centroid`] — Mutable k-means slot value
//! - [`Groups`] — Representative centroids for two-level nearest search
//! - [`Assignment`] — Per-slot membership of one k-means iteration
//! - [`Clusters`] — Final k-means result: id → (text, score)
//!
//! ## Entry Point
//!
//! - [`Cluster`] — `run()` prunes, initializes, and dispatches to a clusterer
mod agglomerative;
mod assignment;
mod centroid;
mod cluster;
mod clusters;
mod dendrogram;
mod groups;
mod kmeans;
mod metric;
mod node;

pub use agglomerative::*;
pub use assignment::*;
pub use centroid::*;
pub use cluster::*;
pub use clusters::*;
pub use dendrogram::*;
pub use groups::*;
pub use kmeans::*;
pub use metric::*;
pub use node::*;
