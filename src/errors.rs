//! Define error types for helper-access construction.
//!
//! Naming and expression rendering are total; the only failures are malformed inputs caught at the
//! boundary with upstream collaborators (annotation data, symbol resolution).

use miette::Diagnostic;
use thiserror::Error;

/// Error raised while building helper access for a field.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum AccessError {
    #[error("no helper separator configured for `{owner}`")]
    #[diagnostic(
        code(pkgaccess::missing_separator),
        help("pass an explicit empty separator, or select `AbsentSeparator::Empty` / `AbsentSeparator::LegacyLiteral`")
    )]
    MissingSeparator { owner: String },

    #[error("owner type name is empty")]
    #[diagnostic(code(pkgaccess::empty_owner))]
    EmptyOwnerName,

    #[error("field name is empty (owner `{owner}`)")]
    #[diagnostic(code(pkgaccess::empty_field))]
    EmptyFieldName { owner: String },
}

/// Result type for helper-access construction.
pub type AccessResult<T> = Result<T, AccessError>;
