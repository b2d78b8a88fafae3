//! Schema-validated CSL style node tree and name formatting decisions.
//!
//! This crate provides the generic node model behind a parsed CSL style and
//! the interpretive queries for its hardest element, `name`:
//!
//! - [`Schema`]: per-kind attribute sets, defaults, and child roles,
//!   declared once and validated at construction.
//! - [`StyleTree`] / [`NodeId`]: the arena-owned node tree with ordered,
//!   role-keyed children and lookup-only parent links.
//! - [`NameFormat`]: truncation, delimiter placement, sort-order, connector,
//!   and et-al decisions for a `name` node.
//!
//! The XML/text parser that produces the tree lives outside this crate;
//! the tree only consumes already-parsed attribute strings.
//!
//! # Example
//!
//! ```rust
//! use cslkit_style::{NameFormat, StyleTree, style_schema};
//!
//! let mut tree = StyleTree::new(style_schema());
//! let id = tree
//!     .node("name", &[("and", "and"), ("et-al-min", "3"), ("et-al-use-first", "1")])
//!     .unwrap();
//!
//! let name = NameFormat::new(&tree, id).unwrap();
//! assert!(name.should_truncate(3, false));
//! assert_eq!(name.truncate(&["Doe", "Smith", "Jones"], false), &["Doe"]);
//! assert!(name.delimiter_precedes_last(3));
//! ```

pub mod error;
pub mod names;
pub mod schema;
pub mod tree;

// Re-export main types
pub use error::{Error, Result};
pub use names::{DelimiterPrecedesLast, ELLIPSIS, NameFormat, NamesNode, kind, style_schema};
pub use schema::{ANY_KIND, Schema};
pub use tree::{NodeId, StyleTree};
