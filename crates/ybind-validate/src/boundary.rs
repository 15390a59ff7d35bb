//! # Boundary Operations
//!
//! The create/read/update/delete verbs exist here only insofar as they
//! invoke validation: every verb canonicalizes the tree first, and on a
//! validation error the session provider is never called. What the provider
//! does with the payload — connect, authenticate, encode, transmit — is its
//! own business; this crate knows nothing about the wire.

use tracing::debug;

use ybind_core::{ServiceError, YError};
use ybind_tree::{DataTree, NodeId};

use crate::engine::validate_and_canonicalize;
use crate::graph::CanonicalGraph;

/// The boundary verb being executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Create the payload's subtree on the remote store.
    Create,
    /// Read state matching the payload's subtree.
    Read,
    /// Update the remote subtree to match the payload.
    Update,
    /// Delete the remote subtree identified by the payload.
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Operation::Create => "create",
            Operation::Read => "read",
            Operation::Update => "update",
            Operation::Delete => "delete",
        })
    }
}

/// The session/transport collaborator. Implementations carry the connection
/// lifecycle and the wire encoding; they only ever see validated payloads.
pub trait SessionProvider {
    /// Execute one boundary operation against the remote store. A `Read`
    /// may return a result graph; the other verbs return `None`.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] for any transport- or remote-side
    /// failure. The error passes through to the caller unchanged.
    fn execute(
        &mut self,
        operation: Operation,
        payload: &CanonicalGraph,
    ) -> Result<Option<CanonicalGraph>, ServiceError>;
}

/// CRUD orchestration over a [`SessionProvider`]: validate, then transmit.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrudService;

impl CrudService {
    /// A new service.
    pub fn new() -> Self {
        Self
    }

    /// Validate the tree and create it on the remote store.
    pub fn create<P: SessionProvider>(
        &self,
        provider: &mut P,
        tree: &mut DataTree,
        root: NodeId,
    ) -> Result<(), YError> {
        self.transmit(provider, Operation::Create, tree, root)?;
        Ok(())
    }

    /// Validate the tree and read matching state from the remote store.
    pub fn read<P: SessionProvider>(
        &self,
        provider: &mut P,
        tree: &mut DataTree,
        root: NodeId,
    ) -> Result<Option<CanonicalGraph>, YError> {
        self.transmit(provider, Operation::Read, tree, root)
    }

    /// Validate the tree and update the remote store to match.
    pub fn update<P: SessionProvider>(
        &self,
        provider: &mut P,
        tree: &mut DataTree,
        root: NodeId,
    ) -> Result<(), YError> {
        self.transmit(provider, Operation::Update, tree, root)?;
        Ok(())
    }

    /// Validate the tree and delete the matching remote subtree.
    pub fn delete<P: SessionProvider>(
        &self,
        provider: &mut P,
        tree: &mut DataTree,
        root: NodeId,
    ) -> Result<(), YError> {
        self.transmit(provider, Operation::Delete, tree, root)?;
        Ok(())
    }

    fn transmit<P: SessionProvider>(
        &self,
        provider: &mut P,
        operation: Operation,
        tree: &mut DataTree,
        root: NodeId,
    ) -> Result<Option<CanonicalGraph>, YError> {
        // Validation failure aborts before the provider is touched.
        let payload = validate_and_canonicalize(tree, root)?;
        debug!(%operation, "dispatching validated payload");
        let reply = provider.execute(operation, &payload)?;
        Ok(reply)
    }
}
