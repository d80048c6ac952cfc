//! # text-vectorize
//!
//! Turns raw documents into dense count, term-frequency and TF-IDF matrices.
//!
//! Documents are tokenized by splitting on whitespace and lowercasing every
//! token. The vocabulary assigns indices in first-seen order, so column `i` of
//! every matrix corresponds to `feature_names()[i]`.
//!
//! ```rust
//! use text_vectorize::{CountVectorizer, TfidfVectorizer};
//!
//! let corpus = [
//!     "Crock Pot Pasta Never boil pasta again",
//!     "Pasta Pomodoro Fresh ingredients Parmesan to taste",
//! ];
//!
//! let mut counts = CountVectorizer::new();
//! let matrix = counts.fit_transform(&corpus);
//! assert_eq!(counts.feature_names()[2], "pasta");
//! assert_eq!(matrix[0][2], 2);
//!
//! let mut tfidf = TfidfVectorizer::new();
//! let weights = tfidf.fit_transform(&corpus)?;
//! assert_eq!(weights.len(), 2);
//! # Ok::<(), text_vectorize::VectorizeError>(())
//! ```
//!
//! A corpus is always a slice of documents. Passing a bare string does not
//! compile:
//!
//! ```compile_fail
//! use text_vectorize::CountVectorizer;
//!
//! let mut counts = CountVectorizer::new();
//! counts.fit("Python class");
//! ```

mod error;
pub mod pre_processor;

pub use error::{Result, VectorizeError};
pub use pre_processor::{
    CountMatrix, CountVectorizer, IdfVector, TfMatrix, TfidfMatrix, TfidfTransformer,
    TfidfVectorizer,
};
