//! # Error Types — Model and Service Failures
//!
//! Two error kinds cross this stack's public boundary, with distinct message
//! shapes but a common carried payload:
//!
//! - [`ModelError`] — the data violated one of its own schema's rules: a
//!   scalar outside its type domain, or a structural-integrity breach on a
//!   managed collection. Always attributable to one schema instance path and
//!   one offending value.
//! - [`ServiceError`] — a failure outside the data model, produced by the
//!   session/transport collaborators and passed through unchanged.
//!
//! Every error exposes the stable payload `{kind, path, offending_value,
//! expected_kind}` via accessors; message text is free to vary, the payload
//! is not.

use thiserror::Error;

/// Which side of the taxonomy an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The data violated its own schema.
    Model,
    /// A collaborator outside the data model failed.
    Service,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ErrorKind::Model => "Model",
            ErrorKind::Service => "Service",
        })
    }
}

/// A violation of the data model's own rules.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A scalar leaf's raw value is outside its declared type domain.
    /// Raised by the validation engine at commit time.
    #[error("Invalid value \"{value}\" in \"{element}\" element. Path: {path}")]
    InvalidValue {
        /// Absolute schema instance path of the leaf.
        path: String,
        /// The leaf's element name.
        element: String,
        /// Rendered offending raw value.
        value: String,
        /// Description of the expected type domain.
        expected: String,
    },

    /// A leaf-list was assigned a raw sequence wholesale instead of being
    /// grown element by element. Raised immediately at the call site.
    #[error("Invalid value '{value}' in '{field}'. Please use list append or extend method.")]
    LeafListReplaced {
        /// Absolute schema instance path of the leaf-list.
        path: String,
        /// The leaf-list's element name.
        field: String,
        /// Rendered replacement sequence.
        value: String,
        /// Description of the element type.
        expected: String,
    },

    /// A keyed list was assigned a sequence of entries wholesale instead of
    /// being grown element by element. Raised immediately at the call site.
    #[error("Attempt to assign value of '{value}' to list '{field}'. Please use list append or extend method.")]
    ListReplaced {
        /// Absolute schema instance path of the list.
        path: String,
        /// The list's element name.
        field: String,
        /// Rendered replacement sequence.
        value: String,
        /// Name of the expected entry schema.
        expected: String,
    },

    /// An entry of the wrong schema was appended to a keyed list.
    /// Raised immediately at the call site.
    #[error("Cannot insert \"{value}\" entry into \"{field}\" list, expected \"{expected}\" entries. Path: {path}")]
    IncompatibleElement {
        /// Absolute schema instance path of the list.
        path: String,
        /// The list's element name.
        field: String,
        /// Element name of the offending entry's schema.
        value: String,
        /// Element name of the declared entry schema.
        expected: String,
    },

    /// An entry that already has a parent was appended to a keyed list.
    /// Every node has exactly one owner; reinsertion is refused at the call
    /// site so the ownership tree stays acyclic.
    #[error("Entry \"{value}\" already belongs to a list and cannot be inserted into \"{field}\" list. Path: {path}")]
    EntryReused {
        /// Absolute schema instance path of the list.
        path: String,
        /// The list's element name.
        field: String,
        /// Element name of the offending entry's schema.
        value: String,
        /// Element name of the declared entry schema.
        expected: String,
    },

    /// A field name the node's schema never declared.
    #[error("Unknown element \"{element}\". Path: {path}")]
    UnknownElement {
        /// Absolute schema instance path of the owning node.
        path: String,
        /// The undeclared name.
        element: String,
    },
}

impl ModelError {
    /// The schema instance path the failure is attributable to.
    pub fn path(&self) -> &str {
        match self {
            ModelError::InvalidValue { path, .. }
            | ModelError::LeafListReplaced { path, .. }
            | ModelError::ListReplaced { path, .. }
            | ModelError::IncompatibleElement { path, .. }
            | ModelError::EntryReused { path, .. }
            | ModelError::UnknownElement { path, .. } => path,
        }
    }

    /// The rendered offending value.
    pub fn offending_value(&self) -> &str {
        match self {
            ModelError::InvalidValue { value, .. }
            | ModelError::LeafListReplaced { value, .. }
            | ModelError::ListReplaced { value, .. }
            | ModelError::IncompatibleElement { value, .. }
            | ModelError::EntryReused { value, .. } => value,
            ModelError::UnknownElement { element, .. } => element,
        }
    }

    /// A description of what the schema expected at that path.
    pub fn expected_kind(&self) -> &str {
        match self {
            ModelError::InvalidValue { expected, .. }
            | ModelError::LeafListReplaced { expected, .. }
            | ModelError::ListReplaced { expected, .. }
            | ModelError::IncompatibleElement { expected, .. }
            | ModelError::EntryReused { expected, .. } => expected,
            ModelError::UnknownElement { .. } => "declared element",
        }
    }
}

/// A failure produced outside the data model, by the session or the remote
/// store. Never produced by the validation engine itself; always passed
/// through to the caller unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// The session could not reach or keep its connection to the remote
    /// store.
    #[error("session connection error: {message}")]
    Connection {
        /// Transport-level detail.
        message: String,
    },

    /// The remote store rejected an otherwise well-formed payload.
    #[error("operation rejected by remote store: {message}")]
    Rejected {
        /// Remote-side detail.
        message: String,
        /// Remote-reported path, when the store supplied one.
        path: String,
    },
}

impl ServiceError {
    /// The path the collaborator attributed the failure to, if any.
    pub fn path(&self) -> &str {
        match self {
            ServiceError::Connection { .. } => "",
            ServiceError::Rejected { path, .. } => path,
        }
    }
}

/// Top-level error type: every fallible operation in the stack surfaces one
/// of the two kinds.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum YError {
    /// The data violated its own schema.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A collaborator outside the data model failed.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl YError {
    /// Which side of the taxonomy this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            YError::Model(_) => ErrorKind::Model,
            YError::Service(_) => ErrorKind::Service,
        }
    }

    /// The schema instance path the failure is attributable to. Empty for
    /// service failures that carry no path.
    pub fn path(&self) -> &str {
        match self {
            YError::Model(e) => e.path(),
            YError::Service(e) => e.path(),
        }
    }

    /// The rendered offending value. Empty for service failures.
    pub fn offending_value(&self) -> &str {
        match self {
            YError::Model(e) => e.offending_value(),
            YError::Service(_) => "",
        }
    }

    /// A description of the expected type domain. Empty for service
    /// failures.
    pub fn expected_kind(&self) -> &str {
        match self {
            YError::Model(e) => e.expected_kind(),
            YError::Service(_) => "",
        }
    }
}
