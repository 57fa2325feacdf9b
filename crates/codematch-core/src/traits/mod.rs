//! Seams between the scorer, the ranking engine, and external collaborators.

pub mod candidate_scorer;
pub mod metadata_store;

pub use candidate_scorer::CandidateScorer;
pub use metadata_store::MetadataStore;
