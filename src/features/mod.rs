// Weighted-feature extraction: TF-IDF over the normalized corpus.

pub mod vectorizer;

pub use vectorizer::{FeatureMatrix, FittedVectorizer, TfidfVectorizer};
