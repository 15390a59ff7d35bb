//! # ybind-core — Foundational Types for the ybind Stack
//!
//! This crate is the bedrock of the ybind data-binding stack. It defines the
//! value-level primitives every other crate builds on: the unconstrained raw
//! candidate values a caller may assign to a leaf, the strongly typed
//! canonical values produced by validation, the fixed-point `Decimal64`
//! scalar, and the two-kind error taxonomy surfaced to callers.
//!
//! ## Key Design Principles
//!
//! 1. **Raw and canonical values are distinct types.** Assignment accepts any
//!    [`RawValue`] shape without complaint; only a [`CanonicalValue`] — the
//!    product of successful validation — is eligible for transmission to a
//!    remote store. The split makes the compiler enforce that unvalidated
//!    data never reaches the session boundary.
//!
//! 2. **Two error kinds, one payload.** Every failure is either a
//!    [`ModelError`] (the data violated its own schema) or a [`ServiceError`]
//!    (a collaborator outside the data model failed). Both carry the same
//!    stable payload — path, offending value, expected kind — so callers can
//!    branch on kind without losing diagnostic detail.
//!
//! 3. **Exact arithmetic for domain checks.** Out-of-range detection uses
//!    `i128` comparisons and digit-exact decimal parsing. A candidate like
//!    2^64 is rejected by comparison, never by lossy conversion.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ybind-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod decimal;
pub mod error;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalValue;
pub use decimal::{Decimal64, DecimalError};
pub use error::{ErrorKind, ModelError, ServiceError, YError};
pub use value::RawValue;
