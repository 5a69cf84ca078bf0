//! Configuration for helper access construction.

use std::borrow::Cow;

use pkgaccess_core::HelperNaming;
use pkgaccess_core::conventions::LEGACY_ABSENT_SEPARATOR;

use crate::errors::{AccessError, AccessResult};

/// What to do when upstream annotation data carries no helper separator at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AbsentSeparator {
    /// Refuse; callers must pass `""` for "no separator".
    #[default]
    Reject,
    /// Treat absence as the empty separator (`UserHelper`).
    Empty,
    /// Embed the literal text `null` (`UsernullHelper`), matching output of older generators.
    LegacyLiteral,
}

/// Helper access configuration
#[derive(Debug, Clone, Default)]
pub struct AccessConfig {
    /// Suffix and escape rules for helper names
    pub naming: HelperNaming,
    /// Policy for a missing separator
    pub absent_separator: AbsentSeparator,
}

impl AccessConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the naming rules
    pub fn with_naming(mut self, naming: HelperNaming) -> Self {
        self.naming = naming;
        self
    }

    /// Set the absent-separator policy
    pub fn with_absent_separator(mut self, policy: AbsentSeparator) -> Self {
        self.absent_separator = policy;
        self
    }

    /// Normalize an optional separator into the text placed in helper names.
    ///
    /// `owner` is only used for the error message.
    pub fn separator_text<'a>(&self, separator: Option<&'a str>, owner: &str) -> AccessResult<Cow<'a, str>> {
        match (separator, self.absent_separator) {
            (Some(sep), _) => Ok(Cow::Borrowed(sep)),
            (None, AbsentSeparator::Reject) => Err(AccessError::MissingSeparator {
                owner: owner.to_string(),
            }),
            (None, AbsentSeparator::Empty) => Ok(Cow::Borrowed("")),
            (None, AbsentSeparator::LegacyLiteral) => Ok(Cow::Borrowed(LEGACY_ABSENT_SEPARATOR)),
        }
    }
}
