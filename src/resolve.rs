//! Upstream symbol-resolution seam.
//!
//! Discovering which type declares a field (and that type's package) belongs to the host generator's language model.
//! This crate only consumes the result through [`OwnerResolver`].

use std::collections::HashMap;
use std::hash::Hash;

use pkgaccess_core::QualifiedName;

/// Resolve the owning type of a field handle.
///
/// Resolution failures are the implementor's business; by the time a name comes back it is assumed valid.
pub trait OwnerResolver {
    /// Opaque handle to a field in the host's language model.
    type Field;

    fn resolve_owner(&self, field: &Self::Field) -> QualifiedName;
}

/// Resolver backed by a fixed table, for tests and the debug CLI.
#[derive(Debug, Clone)]
pub struct StaticResolver<F> {
    owners: HashMap<F, QualifiedName>,
    fallback: QualifiedName,
}

impl<F: Eq + Hash> StaticResolver<F> {
    /// Unknown handles resolve to `fallback`.
    pub fn new(fallback: QualifiedName) -> Self {
        Self {
            owners: HashMap::new(),
            fallback,
        }
    }

    pub fn with_owner(mut self, field: F, owner: QualifiedName) -> Self {
        self.owners.insert(field, owner);
        self
    }
}

impl<F: Eq + Hash> OwnerResolver for StaticResolver<F> {
    type Field = F;

    fn resolve_owner(&self, field: &F) -> QualifiedName {
        self.owners.get(field).cloned().unwrap_or_else(|| self.fallback.clone())
    }
}
