use bowl_core::Count;
use bowl_core::MIN_TERM_LENGTH;
use std::collections::BTreeMap;

/// Turns raw text into counted terms.
///
/// Implementors choose how text is normalized and which characters belong
/// to a term. Everything outside the alphabet is a separator, and fragments
/// no longer than [`Tokenizer::min_len`] characters are discarded.
pub trait Tokenizer: Send + Sync {
    /// Normalize raw text before splitting.
    fn normalize(&self, text: &str) -> String {
        text.to_lowercase()
    }
    /// Whether a character may appear inside a term.
    fn accepts(&self, c: char) -> bool;
    /// Terms must be strictly longer than this many characters.
    fn min_len(&self) -> usize {
        MIN_TERM_LENGTH
    }
    /// Distinct qualifying terms with their occurrence counts.
    fn features(&self, text: &str) -> BTreeMap<String, Count> {
        self.normalize(text)
            .split(|c: char| !self.accepts(c))
            .filter(|term| term.chars().count() > self.min_len())
            .fold(BTreeMap::new(), |mut terms, term| {
                *terms.entry(term.to_string()).or_insert(0) += 1;
                terms
            })
    }
}

/// Latin letters plus the accented vowels and ñ/ü of Spanish headlines.
#[derive(Debug, Default, Clone, Copy)]
pub struct Alphabet;

impl Alphabet {
    const EXTRA: &'static [char] = &['ñ', 'á', 'é', 'í', 'ó', 'ú', 'ü'];
}

impl Tokenizer for Alphabet {
    fn accepts(&self, c: char) -> bool {
        c.is_ascii_alphabetic() || Self::EXTRA.contains(&c.to_lowercase().next().unwrap_or(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_non_letters_and_counts() {
        let terms = Alphabet.features("Apple, apple-BANANA 42 cherry!");
        assert_eq!(terms.get("apple"), Some(&2));
        assert_eq!(terms.get("banana"), Some(&1));
        assert_eq!(terms.get("cherry"), Some(&1));
        assert_eq!(terms.len(), 3);
    }

    #[test]
    fn drops_short_fragments() {
        let terms = Alphabet.features("an ox is on the go");
        assert_eq!(terms.keys().collect::<Vec<_>>(), vec!["the"]);
    }

    #[test]
    fn keeps_accented_letters() {
        let terms = Alphabet.features("Años de INFLACIÓN");
        assert!(terms.contains_key("años"));
        assert!(terms.contains_key("inflación"));
    }

    #[test]
    fn custom_normalization() {
        struct Shouting;
        impl Tokenizer for Shouting {
            fn normalize(&self, text: &str) -> String {
                text.to_uppercase()
            }
            fn accepts(&self, c: char) -> bool {
                c.is_ascii_uppercase()
            }
        }
        let terms = Shouting.features("quiet words");
        assert!(terms.contains_key("QUIET"));
        assert!(terms.contains_key("WORDS"));
    }
}
