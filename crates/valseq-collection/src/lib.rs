//! Valseq Collection
//!
//! Array-like collections whose search and membership operations use a
//! domain-defined value equality instead of identity.
//!
//! # Overview
//!
//! [`ValueCollection`] owns an ordered buffer of elements implementing
//! [`ValueEquality`](valseq_domain::ValueEquality) and
//! [`DeepClone`](valseq_domain::DeepClone). Domain collections compose it and
//! implement [`ValueSequence`] to obtain the full operation set.
//!
//! # Ownership Rules
//!
//! | Boundary | Behavior |
//! |----------|----------|
//! | Construction | Deep copy of the caller's input |
//! | `items()`, `at`, `find`, `iter`, `values`, `entries` | Deep copies; mutating them never touches the collection |
//! | `as_slice()` | Borrowed view, not a snapshot; interior-mutable elements can change through it |
//! | `push`, `pop`, `shift`, `unshift`, `splice`, `remove`, `reverse` | Mutate in place |
//! | `sort`, `sort_by`, `fill`, `copy_within` | Return a new instance; `self` unchanged |
//!
//! Search (`index_of`, `last_index_of`, `includes`) always goes through
//! `ValueEquality::compare`.
//!
//! # Example Usage
//!
//! ```
//! use valseq_collection::{value_sequence, ValueSequence};
//! use valseq_domain::ValueEquality;
//!
//! #[derive(Debug, Clone, serde::Serialize)]
//! struct Note {
//!     title: String,
//!     body: String,
//! }
//!
//! impl ValueEquality for Note {
//!     fn compare(&self, other: &Self) -> bool {
//!         self.title == other.title
//!     }
//! }
//!
//! valseq_domain::deep_clone_via_clone!(Note);
//!
//! value_sequence! {
//!     #[derive(Debug)]
//!     struct Notes(Note);
//! }
//!
//! let note = |title: &str| Note { title: title.into(), body: String::new() };
//!
//! let mut notes = Notes::from_items(&[note("a"), note("b")]);
//! assert_eq!(notes.push([note("c")]), 3);
//! assert_eq!(notes.remove(|n| n.title == "b"), 1);
//! assert!(notes.includes(&note("c")));
//! assert_eq!(notes.collection().to_json_string()?, r#"[{"title":"a","body":""},{"title":"c","body":""}]"#);
//! # Ok::<(), valseq_collection::SequenceError>(())
//! ```
//!
//! # Concurrency
//!
//! Collections carry no internal synchronization. Mutation needs `&mut`, so
//! sharing one across threads means wrapping it in a lock held for each call.

#![warn(missing_docs)]

mod collection;
mod config;
mod error;
mod render;
mod sequence;

pub use collection::{ValueCollection, Values};
pub use config::{RenderConfig, RenderStyle, MAX_INDENT_WIDTH};
pub use error::{Result, SequenceError};
pub use sequence::ValueSequence;
