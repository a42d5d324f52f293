//! Test fixtures - small assets for CLI tests.

/// Two roots; the second is checked and has exclusive children.
pub const SMALL_TREE: &str = r#"[
  {
    "id": "a",
    "title": "Alpha",
    "require": ["alpha"],
    "children": [
      { "id": "a1", "title": "Alpha one", "require": ["alpha-one"] }
    ]
  },
  {
    "id": "b",
    "title": "Beta",
    "checked": true,
    "exclusiveChildren": true,
    "children": [
      { "id": "b1", "title": "Beta one", "checked": true, "require": ["beta-one"] },
      { "id": "b2", "title": "Beta two", "require": ["beta-two"] }
    ]
  }
]"#;

pub const SMALL_TEXT: &str = r#"{
  "alpha": { "title": "Alpha", "text": "About alpha." },
  "alpha-one": { "title": "Alpha one", "text": "About alpha one." },
  "beta-one": { "title": "Beta one", "text": "About beta one." },
  "beta-two": { "title": "Beta two", "text": "About beta two." }
}"#;

/// References a fragment that SMALL_TEXT lacks.
pub const TREE_WITH_GHOST: &str = r#"{ "tree": [
  { "id": "g", "title": "Ghost", "checked": true, "require": ["ghost", "alpha"] }
] }"#;

/// Five levels below the root.
pub const DEEP_TREE: &str = r#"[
  { "id": "l0", "title": "L0", "children": [
    { "id": "l1", "title": "L1", "children": [
      { "id": "l2", "title": "L2", "children": [
        { "id": "l3", "title": "L3", "children": [
          { "id": "l4", "title": "L4", "children": [
            { "id": "l5", "title": "L5" }
          ] }
        ] }
      ] }
    ] }
  ] }
]"#;
