//! Derive the public and internal names of a generated helper type.
//!
//! A helper type is named after the type owning the restricted field:
//! `<package>.<Owner><separator>Helper`. The separator comes from generator configuration and is often the
//! escape character (`$`), which binary names also use for nested types. When it is, reads go through an
//! *internal* name with the separator doubled (`User$$Helper`) so they can never resolve to an unrelated nested
//! type called `Helper`. Writes always use the public name.
//!
//! ## Notes
//! - Names are computed fresh on every call; nothing is cached.
//! - The separator is a plain `&str`. Callers holding an optional separator must normalize it first (see the
//!   `pkgaccess` crate's `AccessConfig`), so an absent separator can never leak into a name by accident.

use std::fmt;

use crate::conventions::{ESCAPE_CHAR, HELPER_SUFFIX, PACKAGE_SEPARATOR};

/// A type identifier: package plus simple name.
///
/// Renders as `package.SimpleName`, or just `SimpleName` for types in the default (empty) package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    package: String,
    simple_name: String,
}

impl QualifiedName {
    pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            simple_name: simple_name.into(),
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_empty() {
            f.write_str(&self.simple_name)
        } else {
            write!(f, "{}{}{}", self.package, PACKAGE_SEPARATOR, self.simple_name)
        }
    }
}

/// The two names of one helper type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HelperNames {
    public: QualifiedName,
    internal: QualifiedName,
}

impl HelperNames {
    /// Name used for writes and by any generated code outside the helper's package.
    pub fn public(&self) -> &QualifiedName {
        &self.public
    }

    /// Name used for reads. Equal to [`HelperNames::public`] unless the separator was escaped.
    pub fn internal(&self) -> &QualifiedName {
        &self.internal
    }

    /// Whether the internal name differs from the public one.
    pub fn is_escaped(&self) -> bool {
        self.public != self.internal
    }
}

/// Rules for building helper names.
///
/// ## Examples
/// ```rust
/// use pkgaccess_core::HelperNaming;
///
/// let naming = HelperNaming::default().with_suffix("Access");
/// let names = naming.derive("org.acme", "_", "Order");
/// assert_eq!(names.public().to_string(), "org.acme.Order_Access");
/// assert!(!names.is_escaped());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperNaming {
    /// Character whose repetition marks a separator as colliding with nested-type names.
    pub escape_char: char,
    /// Suffix appended after the separator.
    pub suffix: String,
}

impl Default for HelperNaming {
    fn default() -> Self {
        Self {
            escape_char: ESCAPE_CHAR,
            suffix: HELPER_SUFFIX.to_string(),
        }
    }
}

impl HelperNaming {
    pub fn with_escape_char(mut self, escape_char: char) -> Self {
        self.escape_char = escape_char;
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Derive both helper names for `owner` in `package`.
    ///
    /// ## Parameters
    /// - `package`: package of the owning type (may be empty for the default package).
    /// - `separator`: text placed between the owner's simple name and the suffix; `""` for none.
    /// - `owner`: simple name of the type declaring the restricted field.
    ///
    /// ## Returns
    /// - (`HelperNames`): `public` is `<Owner><separator><suffix>`; `internal` doubles the separator when it is an
    ///   escape run, otherwise equals `public`.
    pub fn derive(&self, package: &str, separator: &str, owner: &str) -> HelperNames {
        let public = QualifiedName::new(package, format!("{owner}{separator}{}", self.suffix));
        let internal = if is_escape_run(separator, self.escape_char) {
            QualifiedName::new(package, format!("{owner}{separator}{separator}{}", self.suffix))
        } else {
            public.clone()
        };
        HelperNames { public, internal }
    }
}

/// Derive helper names with the default rules (`$` escape, `Helper` suffix).
pub fn derive_names(package: &str, separator: &str, owner: &str) -> HelperNames {
    HelperNaming::default().derive(package, separator, owner)
}

/// Check whether `separator` is one or more repetitions of `escape_char` and nothing else.
pub fn is_escape_run(separator: &str, escape_char: char) -> bool {
    !separator.is_empty() && separator.chars().all(|c| c == escape_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dollar_separator_doubles_internal() {
        let names = derive_names("com.example", "$", "User");
        assert_eq!(names.public().to_string(), "com.example.User$Helper");
        assert_eq!(names.internal().to_string(), "com.example.User$$Helper");
        assert!(names.is_escaped());
    }

    #[test]
    fn test_repeated_escape_run_is_doubled_as_a_whole() {
        let names = derive_names("com.example", "$$", "User");
        assert_eq!(names.public().simple_name(), "User$$Helper");
        assert_eq!(names.internal().simple_name(), "User$$$$Helper");
    }

    #[test]
    fn test_plain_separator_keeps_names_equal() {
        let names = derive_names("com.example", "_", "User");
        assert_eq!(names.public().to_string(), "com.example.User_Helper");
        assert_eq!(names.public(), names.internal());
        assert!(!names.is_escaped());
    }

    #[test]
    fn test_empty_separator_is_not_escaped() {
        let names = derive_names("com.example", "", "User");
        assert_eq!(names.public().to_string(), "com.example.UserHelper");
        assert_eq!(names.public(), names.internal());
    }

    #[test]
    fn test_mixed_separator_is_not_escaped() {
        let names = derive_names("com.example", "$_", "User");
        assert_eq!(names.internal().simple_name(), "User$_Helper");
        assert!(!is_escape_run("$_", '$'));
        assert!(!is_escape_run("_$", '$'));
    }

    #[test]
    fn test_default_package_renders_simple_name_only() {
        let names = derive_names("", "$", "User");
        assert_eq!(names.public().to_string(), "User$Helper");
        assert_eq!(names.internal().package(), "");
    }

    #[test]
    fn test_custom_escape_char() {
        let naming = HelperNaming::default().with_escape_char('_');
        let names = naming.derive("p", "__", "Owner");
        assert_eq!(names.internal().simple_name(), "Owner____Helper");
        // `$` is an ordinary character under these rules.
        assert!(!naming.derive("p", "$", "Owner").is_escaped());
    }

    #[test]
    fn test_derive_is_deterministic() {
        assert_eq!(derive_names("a.b", "$", "C"), derive_names("a.b", "$", "C"));
    }

    #[test]
    fn test_qualified_name_ordering_by_package_then_name() {
        let mut names = vec![
            QualifiedName::new("b", "A"),
            QualifiedName::new("a", "Z"),
            QualifiedName::new("a", "B"),
        ];
        names.sort();
        let rendered: Vec<String> = names.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["a.B", "a.Z", "b.A"]);
    }
}
