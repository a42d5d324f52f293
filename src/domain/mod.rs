//! Pure concept-tree logic: data model, mutation, selection, outline.
//!
//! Nothing in this module performs IO. Functions take a tree snapshot and
//! return a new value.

pub mod fragments;
pub mod mutator;
pub mod node;
pub mod outline;
pub mod route;
pub mod selection;

pub use fragments::{compose, ComposedSection, ComposedText, FragmentDictionary, TextFragment};
pub use mutator::mutate;
pub use node::{ConceptNode, ConceptTree};
pub use outline::{validate, visible_rows, Expansion, OutlineRow, MAX_DEPTH};
pub use route::{encode_key, Route};
pub use selection::{ordered_fragment_ids, resolve_fragment_ids};
