//! Track which package-private fields need helper accessors during one generation run.
//!
//! Expression emission records every field it routes through a helper; the helper-method emitter later walks the
//! recorded fields per owner type and defines exactly one `get`/`set` pair for each. Records are never removed while
//! the session is open.
//!
//! ## Notes
//! - There is no global registry. A [`GenerationSession`] owns one and hands out shared handles, so parallel runs
//!   (and tests) are isolated from each other.
//! - [`AccessRegistry::request`] is the atomic check-and-insert; use it instead of `contains_column` followed by
//!   `put_element` when several threads may touch the same owner.
//! - Ending a session closes its registry. Late writes through leftover handles are refused, so a caller is never
//!   told its accessor will be emitted when no report will ever carry it.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use pkgaccess_core::QualifiedName;

#[derive(Debug, Default)]
struct RegistryState {
    /// Owner type -> field names in first-request order
    owners: BTreeMap<QualifiedName, Vec<String>>,
    closed: bool,
}

/// Session-scoped record of requested helper accessors, keyed by owner type.
#[derive(Debug, Default)]
pub struct AccessRegistry {
    state: Mutex<RegistryState>,
}

impl AccessRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        // Every mutation is a single push or flag flip, so a poisoned state is still consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether `field` was already recorded for `owner` in this session.
    pub fn contains_column(&self, owner: &QualifiedName, field: &str) -> bool {
        self.lock()
            .owners
            .get(owner)
            .is_some_and(|fields| fields.iter().any(|f| f == field))
    }

    /// Record `field` for `owner`. Repeated calls, and calls after the session ended, are no-ops.
    pub fn put_element(&self, owner: &QualifiedName, field: &str) {
        self.request(owner, field);
    }

    /// Record `field` for `owner`, returning `true` only if this call inserted it.
    ///
    /// Always `false` once the owning session has ended.
    pub fn request(&self, owner: &QualifiedName, field: &str) -> bool {
        let mut state = self.lock();
        if state.closed {
            tracing::warn!(owner = %owner, field, "helper accessor requested after session end; ignored");
            return false;
        }
        let fields = state.owners.entry(owner.clone()).or_default();
        if fields.iter().any(|f| f == field) {
            return false;
        }
        fields.push(field.to_string());
        tracing::debug!(owner = %owner, field, "recorded helper accessor");
        true
    }

    /// Fields recorded for `owner`, in first-request order.
    pub fn fields(&self, owner: &QualifiedName) -> Vec<String> {
        self.lock().owners.get(owner).cloned().unwrap_or_default()
    }

    /// Owner types with at least one recorded field, sorted.
    pub fn owners(&self) -> Vec<QualifiedName> {
        self.lock().owners.keys().cloned().collect()
    }

    /// Total number of recorded `(owner, field)` pairs.
    pub fn len(&self) -> usize {
        self.lock().owners.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the owning session has ended.
    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Close the registry and drain its records in one step.
    fn close(&self) -> BTreeMap<QualifiedName, Vec<String>> {
        let mut state = self.lock();
        state.closed = true;
        std::mem::take(&mut state.owners)
    }
}

/// One generation run and the registry that lives as long as it does.
///
/// ## Examples
/// ```rust
/// use pkgaccess::registry::GenerationSession;
/// use pkgaccess_core::QualifiedName;
///
/// let session = GenerationSession::begin();
/// let owner = QualifiedName::new("com.example", "User");
/// assert!(session.registry().request(&owner, "name"));
/// assert!(!session.registry().request(&owner, "name"));
///
/// let report = session.end();
/// assert_eq!(report.fields(&owner), ["name".to_string()]);
/// ```
#[derive(Debug)]
pub struct GenerationSession {
    registry: Arc<AccessRegistry>,
}

impl GenerationSession {
    /// Start a session with an empty registry.
    pub fn begin() -> Self {
        tracing::debug!("generation session started");
        Self {
            registry: Arc::new(AccessRegistry::new()),
        }
    }

    /// Borrow the session's registry.
    pub fn registry(&self) -> &AccessRegistry {
        &self.registry
    }

    /// Shared handle for worker threads.
    pub fn handle(&self) -> Arc<AccessRegistry> {
        Arc::clone(&self.registry)
    }

    /// Close the session and hand the recorded accessors to the helper-method emitter.
    ///
    /// Handles still held elsewhere see an empty, closed registry afterwards: `request` returns `false` and
    /// `put_element` records nothing.
    #[tracing::instrument(skip_all)]
    pub fn end(self) -> SessionReport {
        let entries: Vec<(QualifiedName, Vec<String>)> = self.registry.close().into_iter().collect();
        tracing::debug!(owners = entries.len(), "generation session ended");
        SessionReport { entries }
    }
}

/// Recorded accessors of a finished session, ordered by owner type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionReport {
    entries: Vec<(QualifiedName, Vec<String>)>,
}

impl SessionReport {
    pub fn iter(&self) -> impl Iterator<Item = (&QualifiedName, &[String])> {
        self.entries.iter().map(|(owner, fields)| (owner, fields.as_slice()))
    }

    pub fn fields(&self, owner: &QualifiedName) -> &[String] {
        self.entries
            .iter()
            .find(|(o, _)| o == owner)
            .map(|(_, fields)| fields.as_slice())
            .unwrap_or(&[])
    }

    pub fn owner_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
