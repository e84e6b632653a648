use super::*;
use serde::Serialize;

/// An indexed document: caller id, original text, and its term counts.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    id: String,
    text: String,
    vector: Vector,
}

impl Document {
    pub fn new(id: String, text: String, vector: Vector) -> Self {
        Self { id, text, vector }
    }
    pub fn id(&self) -> &str {
        &self.id
    }
    /// the raw text exactly as it was ingested
    pub fn text(&self) -> &str {
        &self.text
    }
    pub fn vector(&self) -> &Vector {
        &self.vector
    }
    pub(crate) fn vector_mut(&mut self) -> &mut Vector {
        &mut self.vector
    }
}
