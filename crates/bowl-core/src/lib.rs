//! Core type aliases, traits, and constants for bowl.
//!
//! This crate provides the foundational types and tuning parameters
//! shared by the feature indexer, the distance engine, and both clusterers.
#![allow(dead_code)]

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Term occurrence counts inside a sparse vector.
pub type Count = u32;
/// Correlation statistics, distances, and membership scores.
pub type Energy = f64;
/// Fractions of the corpus (frequency cutoffs, membership thresholds).
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// FEATURE EXTRACTION
// ============================================================================
/// A document must yield at least this many distinct terms to be indexed.
pub const MIN_DISTINCT_TERMS: usize = 2;
/// Terms must be strictly longer than this many characters.
pub const MIN_TERM_LENGTH: usize = 2;
/// Default document-frequency cutoff in percent (100 disables pruning).
pub const DEFAULT_FREQUENCY_PERCENT: usize = 100;

// ============================================================================
// PEARSON DISTANCE
// ============================================================================
/// Upper bound every agglomerative pair distance must respect.
/// Anything above (or below zero) means the statistics are inconsistent.
pub const DISTANCE_CEILING: Energy = 1.001;

// ============================================================================
// K-MEANS CLUSTERING
// ============================================================================
/// Requested centroid count before auto-capping against corpus size.
pub const KMEANS_DEFAULT_CENTROIDS: usize = 100;
/// Membership threshold in percent; admission ceiling is 1 - T/100.
pub const KMEANS_DEFAULT_THRESHOLD: usize = 50;
/// Lloyd iterations before giving up on a fixed point.
pub const KMEANS_DEFAULT_ITERATIONS: usize = 10;
/// Iterations during which rejected documents may re-seed dead slots.
pub const KMEANS_DEFAULT_WINDOW: usize = 3;
/// Above this many live centroids, search goes through representative groups.
pub const KMEANS_META_CENTROIDS: usize = 30;
/// Averaged features above this count are dropped from centroids.
pub const KMEANS_POPULARITY_CUTOFF: Count = 2;
/// At most one centroid per this many documents (minus one).
pub const KMEANS_DOCUMENTS_PER_CENTROID: usize = 3;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
