// Text normalization: raw course descriptions to cleaned token strings.

pub mod lemma;
pub mod normalizer;
pub mod pos;
pub mod stoplists;

pub use normalizer::TextNormalizer;
pub use stoplists::Stoplists;
