use ahash::HashMap;
use tracing::debug;

use super::{TfidfMatrix, count_vectorizer::CountVectorizer, tfidf_transformer::TfidfTransformer};
use crate::error::Result;

/// Raw text straight to TF-IDF weights.
///
/// Composes a [`CountVectorizer`] with a [`TfidfTransformer`]:
/// `fit_transform(corpus)` equals
/// `TfidfTransformer::new().fit_transform(&CountVectorizer::new().fit_transform(corpus))`.
#[derive(Clone, Debug, Default)]
pub struct TfidfVectorizer {
    count_vectorizer: CountVectorizer,
    transformer: TfidfTransformer,
}

impl TfidfVectorizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit vocabulary and IDF together. On error the previous fit is kept as is.
    pub fn fit_transform<T: AsRef<str>>(&mut self, texts: &[T]) -> Result<TfidfMatrix> {
        debug!(num_texts = texts.len(), "Fitting TfidfVectorizer");
        let mut count_vectorizer = CountVectorizer::new();
        let count_matrix = count_vectorizer.fit_transform(texts);

        let mut transformer = TfidfTransformer::new();
        let tfidf = transformer.fit_transform(&count_matrix)?;

        self.count_vectorizer = count_vectorizer;
        self.transformer = transformer;
        Ok(tfidf)
    }

    /// Weight new documents with the fitted vocabulary and IDF.
    pub fn transform<T: AsRef<str>>(&self, texts: &[T]) -> Result<TfidfMatrix> {
        debug!(
            num_texts = texts.len(),
            "Transforming texts using TfidfVectorizer"
        );
        let count_matrix = self.count_vectorizer.transform(texts);
        self.transformer.transform(&count_matrix)
    }

    #[must_use]
    pub fn feature_names(&self) -> Vec<String> {
        self.count_vectorizer.feature_names()
    }

    #[must_use]
    pub fn num_features(&self) -> usize {
        self.count_vectorizer.num_features()
    }

    #[must_use]
    pub fn vocabulary(&self) -> HashMap<String, usize> {
        self.count_vectorizer.vocabulary()
    }

    #[must_use]
    pub fn idf(&self) -> &[f64] {
        self.transformer.idf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VectorizeError;

    const PASTA_CORPUS: [&str; 2] = [
        "Crock Pot Pasta Never boil pasta again",
        "Pasta Pomodoro Fresh ingredients Parmesan to taste",
    ];

    #[test]
    fn test_matches_count_then_transformer() {
        let mut vectorizer = TfidfVectorizer::new();
        let tfidf = vectorizer.fit_transform(&PASTA_CORPUS).unwrap();

        let counts = CountVectorizer::new().fit_transform(&PASTA_CORPUS);
        let expected = TfidfTransformer::new().fit_transform(&counts).unwrap();

        assert_eq!(tfidf, expected);
    }

    #[test]
    fn test_pasta_corpus_weights() {
        let mut vectorizer = TfidfVectorizer::new();
        let tfidf = vectorizer.fit_transform(&PASTA_CORPUS).unwrap();

        // doc 0: 7 tokens, "pasta" twice; doc 1: 7 tokens, "pasta" once
        let single = 0.201; // round3(round3(1 / 7) * 1.405)
        assert_eq!(
            tfidf[0],
            vec![single, single, 0.286, single, single, single, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
        );
        assert_eq!(
            tfidf[1],
            vec![0.0, 0.0, 0.143, 0.0, 0.0, 0.0, single, single, single, single, single, single]
        );
    }

    #[test]
    fn test_exposes_underlying_vocabulary() {
        let mut vectorizer = TfidfVectorizer::new();
        vectorizer.fit_transform(&PASTA_CORPUS).unwrap();

        assert_eq!(vectorizer.num_features(), 12);
        assert_eq!(vectorizer.feature_names()[2], "pasta");
        assert_eq!(vectorizer.vocabulary().get("taste"), Some(&11));
        assert_eq!(vectorizer.idf().len(), 12);
    }

    #[test]
    fn test_empty_document_fails() {
        let mut vectorizer = TfidfVectorizer::new();
        let err = vectorizer.fit_transform(&["some words", "   "]).unwrap_err();
        assert_eq!(err, VectorizeError::EmptyDocument { row: 1 });
    }

    #[test]
    fn test_empty_corpus_fails() {
        let mut vectorizer = TfidfVectorizer::new();
        let corpus: [&str; 0] = [];
        assert_eq!(
            vectorizer.fit_transform(&corpus).unwrap_err(),
            VectorizeError::EmptyMatrix
        );
    }

    #[test]
    fn test_failed_refit_keeps_previous_fit() {
        let mut vectorizer = TfidfVectorizer::new();
        vectorizer.fit_transform(&["a b", "b c"]).unwrap();

        let err = vectorizer.fit_transform(&["x", ""]).unwrap_err();
        assert_eq!(err, VectorizeError::EmptyDocument { row: 1 });

        assert_eq!(vectorizer.feature_names(), vec!["a", "b", "c"]);
        assert_eq!(vectorizer.feature_names().len(), vectorizer.idf().len());
        assert_eq!(vectorizer.idf(), [1.405, 1.0, 1.405]);

        let tfidf = vectorizer.transform(&["a b"]).unwrap();
        assert_eq!(tfidf, vec![vec![0.703, 0.5, 0.0]]);
    }

    #[test]
    fn test_failed_first_fit_stays_unfitted() {
        let mut vectorizer = TfidfVectorizer::new();
        let corpus: [&str; 0] = [];
        assert!(vectorizer.fit_transform(&corpus).is_err());
        assert!(vectorizer.feature_names().is_empty());
        assert!(vectorizer.idf().is_empty());
    }

    #[test]
    fn test_transform_new_documents() {
        let mut vectorizer = TfidfVectorizer::new();
        vectorizer.fit_transform(&PASTA_CORPUS).unwrap();

        let tfidf = vectorizer.transform(&["pasta fresh pasta unknown"]).unwrap();
        // counts: pasta = 2, fresh = 1, total = 3
        assert_eq!(tfidf[0][2], 0.667);
        assert_eq!(tfidf[0][7], 0.468);
    }

    #[test]
    fn test_transform_document_without_known_tokens_fails() {
        let mut vectorizer = TfidfVectorizer::new();
        vectorizer.fit_transform(&PASTA_CORPUS).unwrap();

        let err = vectorizer.transform(&["risotto"]).unwrap_err();
        assert_eq!(err, VectorizeError::EmptyDocument { row: 0 });
    }
}
