mod count_vectorizer;
mod tfidf_transformer;
mod tfidf_vectorizer;
mod tokenizer;
mod vocabulary;
mod weighting;

pub use count_vectorizer::CountVectorizer;
pub use tfidf_transformer::TfidfTransformer;
pub use tfidf_vectorizer::TfidfVectorizer;

/// One row per document, one column per vocabulary entry.
pub type CountMatrix = Vec<Vec<usize>>;
/// Term frequencies, same shape as the [`CountMatrix`] they came from.
pub type TfMatrix = Vec<Vec<f64>>;
/// Smoothed inverse document frequency, one value per vocabulary entry.
pub type IdfVector = Vec<f64>;
pub type TfidfMatrix = Vec<Vec<f64>>;
