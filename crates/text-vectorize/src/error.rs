use thiserror::Error;

pub type Result<T> = std::result::Result<T, VectorizeError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorizeError {
    /// A row of the count matrix sums to zero, so its term frequencies are undefined.
    #[error("document {row} contains no tokens, term frequency is undefined")]
    EmptyDocument { row: usize },

    #[error("count matrix must contain at least one document and one column")]
    EmptyMatrix,

    #[error("count matrix row {row} has {actual} columns, expected {expected}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
