//! Pipelines.
//!
//! Pipelines read raw ATF files and write parallel corpora.
//! They implement the light [pipeline::Pipeline] trait.
pub mod manifest;
mod parallel_corpus;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use manifest::{Job, Manifest};
pub use parallel_corpus::{list_atf, parse_files, ParallelCorpus, Summary, ATF_EXTENSION};
pub use pipeline::Pipeline;
