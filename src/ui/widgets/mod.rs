pub mod concept_tree;
