//! # Scalar Leaf Fields
//!
//! A [`Leaf`] is one typed slot on a schema-modeled node. It holds the raw
//! value the caller last assigned and, separately, the canonical value the
//! validation engine produced for it. Assignment never validates; the
//! canonical slot is populated only by a successful boundary pass and is
//! cleared again by any later raw assignment.

use ybind_core::{CanonicalValue, RawValue};

/// A scalar leaf slot: raw candidate plus optional canonical value.
#[derive(Debug, Clone, Default)]
pub struct Leaf {
    raw: Option<RawValue>,
    canonical: Option<CanonicalValue>,
}

/// What [`Leaf::get`] currently sees: the canonical value when the leaf has
/// been validated since its last assignment, otherwise the raw value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LeafValue<'a> {
    /// The last-assigned, not-yet-validated value.
    Raw(&'a RawValue),
    /// The canonical value produced by validation.
    Canonical(&'a CanonicalValue),
}

impl Leaf {
    /// An unset leaf.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw value, overwriting any prior raw value and discarding a
    /// stale canonical value. Never fails.
    pub fn set(&mut self, raw: RawValue) {
        self.raw = Some(raw);
        self.canonical = None;
    }

    /// The current value: canonical when validated, else raw; `None` when
    /// the leaf was never assigned.
    pub fn get(&self) -> Option<LeafValue<'_>> {
        if let Some(c) = &self.canonical {
            return Some(LeafValue::Canonical(c));
        }
        self.raw.as_ref().map(LeafValue::Raw)
    }

    /// The raw value, if assigned.
    pub fn raw(&self) -> Option<&RawValue> {
        self.raw.as_ref()
    }

    /// The canonical value, if validated since the last assignment.
    pub fn canonical(&self) -> Option<&CanonicalValue> {
        self.canonical.as_ref()
    }

    /// Whether the leaf has been assigned at all.
    pub fn is_set(&self) -> bool {
        self.raw.is_some() || self.canonical.is_some()
    }

    /// Record the canonical value for the current raw value. Called by the
    /// validation engine after a fully successful pass; not part of the
    /// assembly API.
    pub fn record_canonical(&mut self, value: CanonicalValue) {
        self.canonical = Some(value);
    }

    /// Clear both slots, returning the leaf to its never-assigned state.
    pub fn reset(&mut self) {
        self.raw = None;
        self.canonical = None;
    }
}
