use ahash::{HashMap, HashMapExt};
use tracing::debug;

/// Token to column index mapping, assigned in first-seen order.
///
/// Indices always form the dense range `0..len()` and `feature_names()[i]` is
/// the token mapped to `i`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Vocabulary {
    index: HashMap<String, usize>,
    feature_names: Vec<String>,
}

impl Vocabulary {
    /// Scan documents in order, then tokens within each document in order,
    /// giving every unseen token the next free index.
    pub fn build(tokenized_texts: &[Vec<String>]) -> Self {
        let mut vocabulary = Self::default();
        for tokens in tokenized_texts {
            for token in tokens {
                vocabulary.insert(token);
            }
        }
        debug!(vocab_size = vocabulary.len(), "Vocabulary built");
        vocabulary
    }

    fn insert(&mut self, token: &str) {
        if self.index.contains_key(token) {
            return;
        }
        self.index.insert(token.to_owned(), self.feature_names.len());
        self.feature_names.push(token.to_owned());
    }

    #[must_use]
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.feature_names.len()
    }

    /// Tokens ordered by index.
    #[must_use]
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Owned copy of the token to index mapping.
    #[must_use]
    pub fn to_map(&self) -> HashMap<String, usize> {
        let mut map = HashMap::with_capacity(self.index.len());
        map.extend(self.index.iter().map(|(token, &idx)| (token.clone(), idx)));
        map
    }
}
