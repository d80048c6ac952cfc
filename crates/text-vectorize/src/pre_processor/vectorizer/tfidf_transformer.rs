use tracing::debug;

use super::{IdfVector, TfidfMatrix, weighting};
use crate::error::{Result, VectorizeError};

/// Reweights a count matrix by smoothed inverse document frequency.
///
/// `fit_transform` learns the IDF vector from the matrix it is given and keeps
/// it, so later count matrices of the same width can be reweighted with
/// `transform`.
#[derive(Clone, Debug, Default)]
pub struct TfidfTransformer {
    idf: IdfVector,
}

impl TfidfTransformer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute `round3(tf[d][i] * idf[i])` for every cell.
    ///
    /// The matrix must be rectangular with at least one document and one
    /// column, and no row may sum to zero.
    pub fn fit_transform<R: AsRef<[usize]>>(&mut self, count_matrix: &[R]) -> Result<TfidfMatrix> {
        debug!(num_docs = count_matrix.len(), "Fitting TfidfTransformer");
        // Shape errors take precedence over empty documents.
        let num_features = weighting::validate_shape(count_matrix)?;

        let tf_matrix = weighting::term_frequencies(count_matrix)?;
        debug!("Calculating IDF values");
        let idf = weighting::smoothed_idf(count_matrix, num_features);
        let tfidf = weighting::apply_idf(&tf_matrix, &idf)?;

        debug!(num_features, "TfidfTransformer fitting complete");
        self.idf = idf;
        Ok(tfidf)
    }

    /// Reweight a new count matrix with the IDF learned by the last fit.
    pub fn transform<R: AsRef<[usize]>>(&self, count_matrix: &[R]) -> Result<TfidfMatrix> {
        debug!(
            num_docs = count_matrix.len(),
            "Transforming counts using TfidfTransformer"
        );
        for (row, doc) in count_matrix.iter().enumerate() {
            let actual = doc.as_ref().len();
            if actual != self.idf.len() {
                return Err(VectorizeError::ShapeMismatch {
                    row,
                    expected: self.idf.len(),
                    actual,
                });
            }
        }
        let tf_matrix = weighting::term_frequencies(count_matrix)?;
        weighting::apply_idf(&tf_matrix, &self.idf)
    }

    /// IDF learned by the last fit. Empty until fitted.
    #[must_use]
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }
}
