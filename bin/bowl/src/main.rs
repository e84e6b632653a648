//! Bowl Binary
//!
//! Reads `id<TAB>text` lines from a file or stdin and clusters them.
//!
//! Subcommands: kmeans, hierarchical
use anyhow::Context;
use bowl_clustering::*;
use bowl_features::Corpus;
use clap::Parser;
use clap::Subcommand;
use std::io::BufRead;

#[derive(Parser)]
#[command(author, version, about = "Cluster short texts by Pearson correlation", long_about = None)]
struct Args {
    #[arg(long, help = "read documents from this file instead of stdin")]
    input: Option<std::path::PathBuf>,
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand)]
enum Mode {
    #[command(about = "Thresholded k-means over the documents", alias = "km")]
    Kmeans {
        #[arg(long, default_value_t = bowl_core::KMEANS_DEFAULT_CENTROIDS)]
        centroids: usize,
        #[arg(long, default_value_t = bowl_core::KMEANS_DEFAULT_THRESHOLD)]
        threshold: usize,
        #[arg(long, default_value_t = bowl_core::KMEANS_DEFAULT_ITERATIONS)]
        iterations: usize,
        #[arg(long, default_value_t = bowl_core::KMEANS_DEFAULT_WINDOW)]
        window: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = bowl_core::DEFAULT_FREQUENCY_PERCENT)]
        frequency: usize,
        #[arg(long)]
        json: bool,
    },
    #[command(about = "Agglomerative clustering into dendrograms", alias = "hc")]
    Hierarchical {
        #[arg(long, default_value_t = bowl_core::DEFAULT_FREQUENCY_PERCENT)]
        frequency: usize,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    bowl_core::log();
    let args = Args::parse();
    let mut corpus = Corpus::default();
    match args.input {
        Some(ref path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            load(&mut corpus, std::io::BufReader::new(file))?
        }
        None => load(&mut corpus, std::io::stdin().lock())?,
    }
    match args.mode {
        Mode::Kmeans {
            centroids,
            threshold,
            iterations,
            window,
            seed,
            frequency,
            json,
        } => {
            corpus.set_frequency_threshold(frequency)?;
            let mut km = KMeans::default();
            km.set_centroids(centroids)?;
            km.set_threshold(threshold)?;
            km.set_iterations(iterations)?;
            km.set_window(window);
            if let Some(seed) = seed {
                km.set_seed(seed);
            }
            let clusters = km.run(&mut corpus);
            match json {
                true => println!("{}", serde_json::to_string_pretty(&clusters)?),
                false => print!("{}", clusters),
            }
        }
        Mode::Hierarchical { frequency, json } => {
            corpus.set_frequency_threshold(frequency)?;
            let roots = Agglomerative.run(&mut corpus);
            match json {
                true => println!("{}", serde_json::to_string_pretty(&roots)?),
                false => roots.iter().for_each(|root| print!("{}", root)),
            }
        }
    }
    Ok(())
}

/// Add every well-formed line to the corpus.
fn load<R: BufRead>(corpus: &mut Corpus, reader: R) -> anyhow::Result<()> {
    let mut skipped = 0;
    for line in reader.lines() {
        let line = line.context("reading input")?;
        match line.split_once('\t') {
            Some((id, text)) if !id.trim().is_empty() && corpus.add(id.trim(), text) => {}
            _ if line.trim().is_empty() => {}
            _ => skipped += 1,
        }
    }
    log::info!("{:<32}{:<16}{:<16}", "loaded documents", corpus.len(), skipped);
    Ok(())
}
