use bowl_clustering::*;
use bowl_features::Corpus;

fn corpus(docs: &[(&str, &str)]) -> Corpus {
    let mut corpus = Corpus::default();
    for (id, text) in docs {
        assert!(corpus.add(id, text), "rejected {}", id);
    }
    corpus
}

fn fruit() -> Corpus {
    corpus(&[
        ("a", "apple banana cherry"),
        ("b", "apple banana date"),
        ("c", "zebra yak wolf"),
    ])
}

/// distinct alphabetic term for any index
fn word(mut n: usize) -> String {
    let mut word = String::from("qq");
    loop {
        word.push((b'a' + (n % 26) as u8) as char);
        n /= 26;
        if n == 0 {
            break word;
        }
    }
}

/// `topics` groups of `size` documents: three shared topic terms plus one
/// term unique to the document
fn topical(topics: usize, size: usize) -> Corpus {
    let mut corpus = Corpus::default();
    for t in 0..topics {
        for d in 0..size {
            let id = format!("{}-{}", t, d);
            let text = format!(
                "{} {} {} {}",
                word(10_000 + t * 3),
                word(10_000 + t * 3 + 1),
                word(10_000 + t * 3 + 2),
                word(t * size + d),
            );
            assert!(corpus.add(&id, &text));
        }
    }
    corpus
}

fn topic(id: &str) -> &str {
    id.split('-').next().unwrap()
}

#[test]
fn kmeans_groups_related_titles() {
    for seed in 0..16 {
        let ref mut corpus = fruit();
        let mut km = KMeans::with_seed(seed);
        km.set_centroids(2).unwrap();
        km.set_threshold(30).unwrap();
        let clusters = km.run(corpus);
        assert_eq!(clusters.len(), 1);
        assert!(clusters.cluster_of("a").is_some());
        assert_eq!(clusters.cluster_of("a"), clusters.cluster_of("b"));
        assert_eq!(clusters.cluster_of("c"), None);
    }
}

#[test]
fn kmeans_leaves_weak_pairs_apart_at_half_threshold() {
    // a and b correlate at 5/12, so their distance never clears 0.5
    for seed in 0..16 {
        let ref mut corpus = fruit();
        let mut km = KMeans::with_seed(seed);
        km.set_centroids(2).unwrap();
        km.set_threshold(50).unwrap();
        let clusters = km.run(corpus);
        assert!(clusters.is_empty());
        assert!(km.iterations() <= km.t());
    }
}

#[test]
fn kmeans_runs_are_reproducible() {
    let run = |seed| {
        let ref mut corpus = topical(12, 8);
        let mut km = KMeans::with_seed(seed);
        km.set_centroids(20).unwrap();
        km.run(corpus)
    };
    let a = run(9);
    let b = run(9);
    assert_eq!(a.iterations(), b.iterations());
    assert_eq!(a.iter().collect::<Vec<_>>(), b.iter().collect::<Vec<_>>());
}

#[test]
fn kmeans_with_grouped_centroids_keeps_topics_apart() {
    let ref mut corpus = topical(15, 10);
    let mut km = KMeans::with_seed(17);
    km.set_centroids(40).unwrap();
    km.set_iterations(12).unwrap();
    let clusters = km.run(corpus);
    assert!(!clusters.is_empty());
    assert!(km.iterations() <= 12);
    let mut seen = std::collections::BTreeSet::new();
    for cluster in clusters.iter() {
        assert!(cluster.len() > 1);
        let first = topic(cluster.keys().next().unwrap());
        for (id, member) in cluster.iter() {
            assert_eq!(topic(id), first);
            assert!(member.score < km.ceiling());
            assert!(seen.insert(id.clone()), "{} in two clusters", id);
        }
    }
}

#[test]
fn kmeans_results_serialize() {
    let ref mut corpus = fruit();
    let mut km = KMeans::with_seed(1);
    km.set_threshold(30).unwrap();
    let clusters = km.run(corpus);
    let json = serde_json::to_value(&clusters).unwrap();
    assert_eq!(json["iterations"], km.iterations());
    assert_eq!(json["clusters"][0]["a"]["text"], "apple banana cherry");
}

#[test]
fn hierarchical_merges_everything_it_can() {
    let ref mut corpus = corpus(&[
        ("a", "alpha beta cat"),
        ("b", "alpha beta dog"),
        ("c", "alpha beta elk"),
        ("d", "alpha beta fox"),
    ]);
    let roots = Agglomerative.run(corpus);
    assert_eq!(roots.len(), 2);
    let mut ids = roots.iter().flat_map(Dendrogram::ids).collect::<Vec<_>>();
    ids.sort();
    assert_eq!(ids, vec!["a", "b", "c", "d"]);
    assert!(roots.iter().all(|r| !r.is_leaf()));
}

#[test]
fn pruning_applies_before_clustering() {
    let ref mut corpus = corpus(&[
        ("a", "common apple banana"),
        ("b", "common apple cherry"),
        ("c", "common zebra yak"),
        ("d", "common zebra wolf"),
    ]);
    corpus.set_frequency_threshold(60).unwrap();
    let mut km = KMeans::with_seed(5);
    km.set_threshold(10).unwrap();
    km.run(corpus);
    assert!(!corpus.vocabulary().contains("common"));
    assert!(corpus.vocabulary().contains("apple"));
}

#[test]
fn kmeans_ignores_documents_emptied_by_pruning() {
    let docs = [
        ("a1", "common everyday apple banana cherry"),
        ("a2", "common everyday apple banana cherry"),
        ("z1", "common everyday zebra wolf yak"),
        ("z2", "common everyday zebra wolf yak"),
        ("e1", "common everyday"),
        ("e2", "common everyday"),
        ("q1", "common quartz granite basalt"),
        ("q2", "common quartz granite basalt"),
        ("m1", "common marble slate flint"),
    ];
    for seed in 0..64 {
        let ref mut corpus = corpus(&docs);
        corpus.set_frequency_threshold(60).unwrap();
        let mut km = KMeans::with_seed(seed);
        km.set_centroids(2).unwrap();
        km.set_threshold(50).unwrap();
        let clusters = km.run(corpus);
        assert!(corpus.document(corpus.position("e1").unwrap()).vector().is_empty());
        for cluster in clusters.iter() {
            let mut topics = cluster
                .keys()
                .filter(|id| !id.starts_with('e'))
                .map(|id| &id[..1])
                .collect::<Vec<_>>();
            topics.dedup();
            assert!(topics.len() <= 1, "seed {} mixed {:?}", seed, cluster.keys());
        }
    }
}
