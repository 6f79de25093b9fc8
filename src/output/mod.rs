// Output formatting: terminal display and collaborator exports.

pub mod centroids;
pub mod terminal;
