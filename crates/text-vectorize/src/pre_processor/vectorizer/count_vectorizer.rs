use ahash::HashMap;
use tracing::debug;

use super::{CountMatrix, IdfVector, TfMatrix, tokenizer, vocabulary::Vocabulary, weighting};
use crate::error::Result;

/// Bag-of-words vectorizer over whitespace tokens.
///
/// Each instance owns its vocabulary. Fitting again replaces it entirely.
#[derive(Clone, Debug, Default)]
pub struct CountVectorizer {
    vocab: Vocabulary,
}

impl CountVectorizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the vocabulary from `texts`, discarding any previous one.
    pub fn fit<T: AsRef<str>>(&mut self, texts: &[T]) {
        debug!(num_texts = texts.len(), "Fitting CountVectorizer");
        let tokenized_texts = tokenizer::tokenize(texts);
        self.fit_from_tokenized(&tokenized_texts);
    }

    fn fit_from_tokenized(&mut self, tokenized_texts: &[Vec<String>]) {
        self.vocab = Vocabulary::build(tokenized_texts);
        debug!(
            vocab_size = self.vocab.len(),
            "CountVectorizer fitting complete"
        );
    }

    /// Count vocabulary tokens in each document.
    ///
    /// Every row has `num_features()` columns. Tokens outside the vocabulary
    /// are ignored, and an unfitted vectorizer yields zero-width rows.
    #[must_use]
    pub fn transform<T: AsRef<str>>(&self, texts: &[T]) -> CountMatrix {
        debug!(
            num_texts = texts.len(),
            "Transforming texts using CountVectorizer"
        );
        let tokenized_texts = tokenizer::tokenize(texts);
        self.transform_from_tokenized(&tokenized_texts)
    }

    fn transform_from_tokenized(&self, tokenized_texts: &[Vec<String>]) -> CountMatrix {
        let num_features = self.num_features();
        let matrix: CountMatrix = tokenized_texts
            .iter()
            .map(|tokens| {
                let mut row = vec![0usize; num_features];
                for col_idx in tokens.iter().filter_map(|token| self.vocab.index_of(token)) {
                    row[col_idx] += 1;
                }
                row
            })
            .collect();

        debug!(
            num_docs = matrix.len(),
            num_features, "Text transformation complete"
        );
        matrix
    }

    /// Fit and transform the same corpus, tokenizing it only once.
    ///
    /// Produces exactly what `fit` followed by `transform` would.
    pub fn fit_transform<T: AsRef<str>>(&mut self, texts: &[T]) -> CountMatrix {
        debug!(num_texts = texts.len(), "fit_transform: tokenizing once");
        let tokenized_texts = tokenizer::tokenize(texts);
        self.fit_from_tokenized(&tokenized_texts);
        self.transform_from_tokenized(&tokenized_texts)
    }

    /// Snapshot of the tokens ordered by column index. Empty until fitted.
    #[must_use]
    pub fn feature_names(&self) -> Vec<String> {
        self.vocab.feature_names().to_vec()
    }

    #[must_use]
    pub fn num_features(&self) -> usize {
        self.vocab.len()
    }

    /// Snapshot of the token to column index mapping.
    #[must_use]
    pub fn vocabulary(&self) -> HashMap<String, usize> {
        self.vocab.to_map()
    }

    /// Term frequencies of an arbitrary count matrix.
    ///
    /// Fails with [`crate::VectorizeError::EmptyDocument`] on any row that sums to zero.
    pub fn tf_transform<R: AsRef<[usize]>>(&self, count_matrix: &[R]) -> Result<TfMatrix> {
        weighting::term_frequencies(count_matrix)
    }

    /// Smoothed inverse document frequency of each column.
    ///
    /// The matrix must be rectangular with at least one document and one column.
    pub fn idf_transform<R: AsRef<[usize]>>(&self, count_matrix: &[R]) -> Result<IdfVector> {
        weighting::inverse_document_frequencies(count_matrix)
    }
}
