//! TF and smoothed IDF over dense count matrices.
//!
//! Both the count vectorizer helpers and the TF-IDF transformer go through
//! these functions, so the formulas live in exactly one place.

use tracing::debug;

use super::{IdfVector, TfMatrix, TfidfMatrix};
use crate::error::{Result, VectorizeError};

/// Round to three decimal places.
///
/// Rounds the exact binary value, so `0.0625` is a true tie and goes to the
/// even digit (`0.062`) while `0.7025`, stored slightly above the tie, goes up.
#[must_use]
pub fn round3(value: f64) -> f64 {
    format!("{value:.3}").parse().unwrap_or(value)
}

/// Check that the matrix has at least one document, a non-empty first row and
/// equal-length rows. Returns the column count.
pub fn validate_shape<R: AsRef<[usize]>>(count_matrix: &[R]) -> Result<usize> {
    let num_features = count_matrix
        .first()
        .map(|row| row.as_ref().len())
        .filter(|&len| len > 0)
        .ok_or(VectorizeError::EmptyMatrix)?;

    for (row, doc) in count_matrix.iter().enumerate().skip(1) {
        let actual = doc.as_ref().len();
        if actual != num_features {
            return Err(VectorizeError::ShapeMismatch {
                row,
                expected: num_features,
                actual,
            });
        }
    }
    Ok(num_features)
}

/// `tf[d][i] = round3(count[d][i] / sum(count[d]))`.
///
/// Rows are handled independently and need not share a length. A row summing
/// to zero is an [`VectorizeError::EmptyDocument`].
pub fn term_frequencies<R: AsRef<[usize]>>(count_matrix: &[R]) -> Result<TfMatrix> {
    let tf = count_matrix
        .iter()
        .enumerate()
        .map(|(row, doc)| {
            let counts = doc.as_ref();
            let total: usize = counts.iter().sum();
            if total == 0 {
                return Err(VectorizeError::EmptyDocument { row });
            }
            let total = total as f64;
            Ok(counts
                .iter()
                .map(|&count| round3(count as f64 / total))
                .collect())
        })
        .collect::<Result<TfMatrix>>()?;

    debug!(num_docs = tf.len(), "Term frequencies computed");
    Ok(tf)
}

/// `idf[i] = round3(ln((n_docs + 1) / (df[i] + 1)) + 1)`, where `df[i]` counts
/// the documents with a non-zero entry in column `i`.
pub fn inverse_document_frequencies<R: AsRef<[usize]>>(count_matrix: &[R]) -> Result<IdfVector> {
    let num_features = validate_shape(count_matrix)?;
    Ok(smoothed_idf(count_matrix, num_features))
}

/// IDF of a matrix already known to be `count_matrix.len() x num_features`.
pub fn smoothed_idf<R: AsRef<[usize]>>(count_matrix: &[R], num_features: usize) -> IdfVector {
    let mut df = vec![0usize; num_features];
    for doc in count_matrix {
        for (col_idx, &count) in doc.as_ref().iter().enumerate() {
            if count > 0 {
                df[col_idx] += 1;
            }
        }
    }

    let n_docs = count_matrix.len() as f64;
    let idf: IdfVector = df
        .iter()
        .map(|&doc_freq| round3(((n_docs + 1.0) / (doc_freq as f64 + 1.0)).ln() + 1.0))
        .collect();

    debug!(
        num_docs = count_matrix.len(),
        num_features, "Inverse document frequencies computed"
    );
    idf
}

/// Element-wise `round3(tf[d][i] * idf[i])`.
pub fn apply_idf(tf: &[Vec<f64>], idf: &[f64]) -> Result<TfidfMatrix> {
    tf.iter()
        .enumerate()
        .map(|(row, doc)| {
            if doc.len() != idf.len() {
                return Err(VectorizeError::ShapeMismatch {
                    row,
                    expected: idf.len(),
                    actual: doc.len(),
                });
            }
            Ok(doc
                .iter()
                .zip(idf)
                .map(|(&tf, &idf)| round3(tf * idf))
                .collect())
        })
        .collect()
}
