mod vectorizer;

pub use vectorizer::{
    CountMatrix, CountVectorizer, IdfVector, TfMatrix, TfidfMatrix, TfidfTransformer,
    TfidfVectorizer,
};
