//! Session state: the current tree snapshot plus expansion and selection.
//!
//! The session owns the single mutable snapshot. Every transition is
//! computed by the pure functions in [`crate::domain`].

use std::collections::BTreeSet;

use tracing::debug;

use crate::domain::{mutate, ordered_fragment_ids, ConceptTree, Route};

/// How the user reached a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// The checkbox control itself. Commits the toggled tree.
    Checkbox,
    /// The row or its label. Only changes expansion and selection.
    Row,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    tree: ConceptTree,
    selected: Option<String>,
    expanded: BTreeSet<String>,
}

impl Session {
    pub fn new(tree: ConceptTree) -> Self {
        Self {
            tree,
            selected: None,
            expanded: BTreeSet::new(),
        }
    }

    /// Start with the given route keys expanded.
    pub fn with_expanded<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expanded = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn tree(&self) -> &ConceptTree {
        &self.tree
    }

    /// Key of the last node the user interacted with
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn expanded(&self) -> &BTreeSet<String> {
        &self.expanded
    }

    pub fn is_expanded(&self, route: &Route) -> bool {
        self.expanded.contains(&route.key())
    }

    /// Fragment ids of the current tree, in display order
    pub fn fragment_ids(&self) -> Vec<String> {
        ordered_fragment_ids(&self.tree)
    }

    /// State after the user interacts with the node at `route`.
    ///
    /// An invalid route leaves the state unchanged.
    pub fn apply_change(&self, route: &Route, interaction: Interaction) -> Session {
        let (tree, toggled) = match mutate(&self.tree, route) {
            Ok(result) => result,
            Err(_) => return self.clone(),
        };

        let key = route.key();
        let mut expanded = self.expanded.clone();
        let expand = match interaction {
            Interaction::Checkbox => toggled.checked,
            Interaction::Row => !expanded.contains(&key),
        };
        if expand {
            expanded.insert(key.clone());
        } else {
            expanded.remove(&key);
        }

        debug!(
            route = %route,
            ?interaction,
            checked = toggled.checked,
            expanded = expand,
            "applied interaction"
        );

        Session {
            tree: match interaction {
                Interaction::Checkbox => tree,
                Interaction::Row => self.tree.clone(),
            },
            selected: Some(key),
            expanded,
        }
    }

    /// In-place form of [`Session::apply_change`].
    pub fn apply(&mut self, route: &Route, interaction: Interaction) {
        *self = self.apply_change(route, interaction);
    }
}
