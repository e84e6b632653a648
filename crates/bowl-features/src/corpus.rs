//! Document ingestion and vocabulary maintenance.
use super::*;
use bowl_core::DEFAULT_FREQUENCY_PERCENT;
use bowl_core::MIN_DISTINCT_TERMS;
use bowl_core::Probability;
use std::collections::HashMap;

/// The feature indexer.
///
/// Documents live in an arena in ingestion order and are referenced by
/// position everywhere downstream. The vocabulary and every document vector
/// are only rewritten by [`Corpus::prune`], which a clustering run invokes
/// once before building its nodes.
pub struct Corpus {
    tokenizer: Box<dyn Tokenizer>,
    vocabulary: Vocabulary,
    documents: Vec<Document>,
    positions: HashMap<String, usize>,
    /// fraction of the corpus above which a term is considered noise
    frequency: Probability,
}

impl Default for Corpus {
    fn default() -> Self {
        Self::with_tokenizer(Alphabet)
    }
}

impl Corpus {
    pub fn with_tokenizer<T>(tokenizer: T) -> Self
    where
        T: Tokenizer + 'static,
    {
        Self {
            tokenizer: Box::new(tokenizer),
            vocabulary: Vocabulary::default(),
            documents: Vec::new(),
            positions: HashMap::new(),
            frequency: DEFAULT_FREQUENCY_PERCENT as Probability / 100.,
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }
    pub fn document(&self, position: usize) -> &Document {
        &self.documents[position]
    }
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }
    pub fn text(&self, id: &str) -> Option<&str> {
        self.position(id).map(|i| self.documents[i].text())
    }
    /// current document-frequency cutoff as a fraction
    pub fn frequency(&self) -> Probability {
        self.frequency
    }

    /// Index a document.
    ///
    /// Returns `false` without touching any state when the id is already
    /// taken or the text yields fewer than two distinct terms.
    pub fn add(&mut self, id: &str, raw: &str) -> bool {
        if self.positions.contains_key(id) {
            log::debug!("{:<32}{}", "skipping duplicate id", id);
            return false;
        }
        let features = self.tokenizer.features(raw);
        if features.len() < MIN_DISTINCT_TERMS {
            log::debug!("{:<32}{}", "skipping sparse document", id);
            return false;
        }
        let vector = features
            .iter()
            .map(|(term, &count)| {
                let index = self.vocabulary.intern(term);
                self.vocabulary.witness(term);
                (index, count)
            })
            .collect::<Vector>();
        self.positions.insert(id.to_string(), self.documents.len());
        self.documents
            .push(Document::new(id.to_string(), raw.to_string(), vector));
        true
    }

    /// Set the document-frequency cutoff, in percent of the corpus.
    /// Terms present in at least that share of documents are pruned
    /// before clustering. 100 disables pruning.
    pub fn set_frequency_threshold(&mut self, percent: usize) -> anyhow::Result<()> {
        anyhow::ensure!(
            (1..=100).contains(&percent),
            "frequency threshold must be within 1..=100, got {}",
            percent
        );
        self.frequency = percent as Probability / 100.;
        Ok(())
    }

    /// Remove every term whose document frequency reaches the cutoff,
    /// from the vocabulary and from every document. Returns removed terms,
    /// most frequent first.
    pub fn prune(&mut self) -> Vec<String> {
        if self.frequency >= 1. {
            return Vec::new();
        }
        let threshold = self.frequency * self.len() as Probability;
        let common = self.vocabulary.common(threshold);
        for term in common.iter() {
            log::info!("{:<32}{}", "deleting common word", term);
            if let Some(index) = self.vocabulary.remove(term) {
                for document in self.documents.iter_mut() {
                    document.vector_mut().remove(index);
                }
            }
        }
        common
    }
}
