// Prospectus: interest clustering for course catalogs
//
// This is the library root. Each module corresponds to a stage of the
// clustering pipeline, plus the collaborator layers around it.

pub mod cluster;
pub mod config;
pub mod error;
pub mod features;
pub mod ingest;
pub mod output;
pub mod pipeline;
pub mod ranking;
pub mod text;
