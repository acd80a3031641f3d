//! Rill IR primitives.
//!
//! This crate contains the leaf data types shared by every phase of the
//! Rill compiler:
//! - `Name` for interned identifiers
//! - `StringInterner` for identifier storage
//! - `Span` for source locations
//! - `TypeId` for interned type handles
//!
//! # Design Philosophy
//!
//! - **Intern everything**: strings become `Name(u32)`, types become
//!   `TypeId(u32)`, so equality is an integer comparison everywhere.
//! - **Plain data**: every type here is `Copy` or cheaply clonable, with
//!   `Eq` and `Hash` so it can key memoized query results.

mod interner;
mod name;
mod span;
mod type_id;

pub use interner::{SharedInterner, StringInterner};
pub use name::Name;
pub use span::Span;
pub use type_id::TypeId;
