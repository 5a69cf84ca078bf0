//! Route reads and writes of a package-private field through its generated helper type.
//!
//! [`PackagePrivateAccess`] ties together the pieces a caller otherwise has to wire up by hand: the owner type, the
//! normalized separator, the two helper names, and the session registry that tells the helper-method emitter which
//! accessors to define.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use pkgaccess_core::{AccessExpression, HelperNames, QualifiedName};

use crate::config::AccessConfig;
use crate::errors::{AccessError, AccessResult};
use crate::registry::AccessRegistry;
use crate::resolve::OwnerResolver;

/// Helper-based access to the package-private fields of one owner type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagePrivateAccess {
    owner: QualifiedName,
    names: HelperNames,
}

impl PackagePrivateAccess {
    /// Build access for the fields of `owner` in `package`.
    ///
    /// ## Errors
    /// - [`AccessError::EmptyOwnerName`] if `owner` is empty.
    /// - [`AccessError::MissingSeparator`] if `separator` is `None` and the config rejects that.
    #[tracing::instrument(skip_all, fields(package = %package, owner = %owner))]
    pub fn new(config: &AccessConfig, package: &str, separator: Option<&str>, owner: &str) -> AccessResult<Self> {
        if owner.is_empty() {
            return Err(AccessError::EmptyOwnerName);
        }
        let owner = QualifiedName::new(package, owner);
        let separator = config.separator_text(separator, &owner.to_string())?;
        let names = config.naming.derive(package, &separator, owner.simple_name());
        tracing::trace!(
            public = %names.public(),
            internal = %names.internal(),
            "derived helper names"
        );
        Ok(Self { owner, names })
    }

    /// Build access for the owner of `field`, as resolved by the host generator.
    pub fn from_field<R: OwnerResolver>(
        resolver: &R,
        config: &AccessConfig,
        field: &R::Field,
        separator: Option<&str>,
    ) -> AccessResult<Self> {
        let owner = resolver.resolve_owner(field);
        Self::new(config, owner.package(), separator, owner.simple_name())
    }

    pub fn owner(&self) -> &QualifiedName {
        &self.owner
    }

    pub fn names(&self) -> &HelperNames {
        &self.names
    }

    /// Read `field` from `receiver`.
    pub fn column_access(&self, field: &str, receiver: &str) -> AccessResult<AccessExpression> {
        self.check_field(field)?;
        Ok(self.names.qualified_get(field, receiver))
    }

    /// Read `field`, passing the field's own name as the argument.
    pub fn short_access(&self, field: &str) -> AccessResult<AccessExpression> {
        self.check_field(field)?;
        Ok(self.names.short_get(field))
    }

    /// Write `value` into `target`'s `field`.
    pub fn set_access(&self, field: &str, target: &str, value: &str) -> AccessResult<AccessExpression> {
        self.check_field(field)?;
        Ok(self.names.setter(field, target, value))
    }

    /// Record that `field` needs helper accessors; `true` if this is the first request this session.
    pub fn record(&self, registry: &AccessRegistry, field: &str) -> AccessResult<bool> {
        self.check_field(field)?;
        Ok(registry.request(&self.owner, field))
    }

    fn check_field(&self, field: &str) -> AccessResult<()> {
        if field.is_empty() {
            return Err(AccessError::EmptyFieldName {
                owner: self.owner.to_string(),
            });
        }
        Ok(())
    }
}
