//! # ybind-schema — Type Descriptors & Constraint Acceptors
//!
//! Defines the schema side of the data binding: the closed set of leaf type
//! kinds with their domain parameters, the immutable object-schema shapes a
//! model is built from, the build-once registry that shares those shapes
//! process-wide, and the acceptors that turn a raw candidate value into a
//! canonical one or a structured violation.
//!
//! ## Type Kinds
//!
//! The kind set is fixed by the schema language, so it is modeled as one
//! exhaustive enum ([`LeafType`]) rather than open-ended trait objects —
//! adding a kind forces every consumer match to handle it.
//!
//! ## Enforcement Timing
//!
//! Nothing in this crate is invoked at leaf-assignment time. The acceptors
//! run in exactly two places: immediately, when elements are appended to a
//! structural container, and at commit time, when the validation engine
//! walks a tree. The acceptors themselves are pure — the caller decides the
//! timing.
//!
//! ## Crate Policy
//!
//! - Depends only on `ybind-core` internally.
//! - Descriptors are immutable after construction and `Send + Sync`;
//!   a loaded [`SchemaRegistry`] may be shared freely across threads.
//! - Definition-time defects (bad regex, empty vocabularies, out-of-range
//!   fraction digits) are [`SchemaError`]s, distinct from the runtime
//!   model-error taxonomy.

pub mod accept;
pub mod object;
pub mod registry;
pub mod types;

pub use accept::{canonicalize, TypeViolation};
pub use object::{LeafDecl, LeafListDecl, ListDecl, ObjectSchema, ObjectSchemaBuilder};
pub use registry::SchemaRegistry;
pub use types::{BitsType, EnumType, IdentityType, LeafType, Pattern, SchemaError, StringType};
