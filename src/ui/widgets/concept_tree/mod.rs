//! Concept tree widget
//!
//! - `menu`: ConceptMenu state, actions, and screen layout
//! - `render`: row, tooltip, and help bar rendering
//! - `input`: keyboard mapping and the interactive loop

mod input;
mod menu;
pub mod render;

pub use input::{key_to_action, run_interactive};
pub use menu::{ConceptMenu, MenuOutcome, Notice, TreeAction};
