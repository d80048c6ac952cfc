use tracing::debug;

/// Split a document on whitespace and lowercase every token.
///
/// Runs of whitespace collapse, so leading, trailing and repeated separators
/// never produce empty tokens.
pub fn tokenize_document(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

pub fn tokenize<T: AsRef<str>>(texts: &[T]) -> Vec<Vec<String>> {
    debug!(num_texts = texts.len(), "Tokenizing texts");
    texts
        .iter()
        .map(|text| tokenize_document(text.as_ref()))
        .collect()
}
