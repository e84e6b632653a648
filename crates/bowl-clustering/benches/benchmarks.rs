criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        computing_pearson_distance,
        building_corpus_vectors,
        clustering_hierarchical,
        clustering_kmeans_flat,
        clustering_kmeans_grouped,
}

fn computing_pearson_distance(c: &mut criterion::Criterion) {
    let ref metric = Metric::new(64, 0);
    let x = metric.node(Vector::random());
    let y = metric.node(Vector::random());
    c.bench_function("compute a Pearson distance", |b| {
        b.iter(|| metric.distance(&x, &y))
    });
}

fn building_corpus_vectors(c: &mut criterion::Criterion) {
    c.bench_function("index 500 titles", |b| b.iter(|| titles(500, 25)));
}

fn clustering_hierarchical(c: &mut criterion::Criterion) {
    c.bench_function("agglomerative clustering of 60 titles", |b| {
        b.iter(|| Agglomerative.run(&mut titles(60, 6)))
    });
}

fn clustering_kmeans_flat(c: &mut criterion::Criterion) {
    c.bench_function("k-means clustering (single group)", |b| {
        b.iter(|| {
            let mut km = KMeans::with_seed(0);
            km.set_centroids(20).unwrap();
            km.run(&mut titles(500, 25))
        })
    });
}

fn clustering_kmeans_grouped(c: &mut criterion::Criterion) {
    c.bench_function("k-means clustering (grouped centroids)", |b| {
        b.iter(|| {
            let mut km = KMeans::with_seed(0);
            km.set_centroids(100).unwrap();
            km.run(&mut titles(500, 25))
        })
    });
}

/// `n` titles over `topics` topics: two terms shared by every title,
/// three topic terms and one term of its own
fn titles(n: usize, topics: usize) -> Corpus {
    let word = |mut i: usize| {
        let mut word = String::from("qq");
        loop {
            word.push((b'a' + (i % 26) as u8) as char);
            i /= 26;
            if i == 0 {
                break word;
            }
        }
    };
    let mut corpus = Corpus::default();
    for i in 0..n {
        let t = i % topics;
        let text = (0..3)
            .map(|k| word(100_000 + t * 3 + k))
            .chain(std::iter::once(word(i)))
            .collect::<Vec<_>>()
            .join(" ");
        let text = format!("bowl soup {}", text);
        corpus.add(&i.to_string(), &text);
    }
    corpus
}

use bowl_clustering::*;
use bowl_core::Arbitrary;
use bowl_features::Corpus;
use bowl_features::Vector;
