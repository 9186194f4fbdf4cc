//! Valseq Domain Layer
//!
//! This crate defines the two capabilities every element of a value-equal
//! sequence must opt into. It has ZERO external dependencies and is the
//! foundation the collection layer builds on.
//!
//! ## Key Concepts
//!
//! - **Value equality**: elements are matched by a domain-defined relation
//!   (`ValueEquality::compare`), never by address or derived structural equality
//! - **Deep clone**: an explicit, fully independent copy (`DeepClone::deep_clone`)
//!   used wherever a collection must not share mutable sub-structure with callers
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Capability traits plus impls for standard library types
//! - Concrete domain entity types live in consumer crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod deep_clone;
pub mod equality;

// Re-exports for convenience
pub use deep_clone::{deep_clone_slice, DeepClone};
pub use equality::{value_position, value_rposition, ValueEquality};
