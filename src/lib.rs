//! Concept Engine - checkbox-tree configuration wizard
//!
//! Users pick concepts from a hierarchical checkbox tree. Every checked
//! concept contributes text fragments, and the composed text can be copied
//! out. The tree logic is pure (see [`domain`]); [`session::Session`] holds
//! the single mutable snapshot for an interactive session.

pub mod assets;
pub mod config;
pub mod domain;
pub mod error;
pub mod session;

// Re-exports for convenience
pub use assets::Assets;
pub use config::Config;
pub use domain::{
    compose, encode_key, mutate, ordered_fragment_ids, resolve_fragment_ids, ConceptNode,
    ConceptTree, FragmentDictionary, Route, TextFragment,
};
pub use error::{ConceptError, ConceptResult};
pub use session::{Interaction, Session};
