//! Build accessor expressions that route field access through a helper type.
//!
//! Three shapes exist, and they differ in which helper name they reference:
//!
//! | shape          | helper name | rendered text                                   |
//! |----------------|-------------|-------------------------------------------------|
//! | `QualifiedGet` | internal    | `<helper>.get<Field>(<receiver>)`               |
//! | `ShortGet`     | internal    | `<helper>.get<Field>(<field>)`                  |
//! | `Set`          | public      | `<helper>.set<Field>(<target>, <value>)`        |
//!
//! Placeholders are substituted verbatim: no quoting or escaping happens here.
//!
//! ## Notes
//! - The free functions take the helper name explicitly. Prefer the [`HelperNames`] methods, which pick the internal
//!   name for reads and the public name for writes.
//! - [`accessor_name`] is also what the helper-method emitter must use for method definitions.

use std::fmt;

use crate::conventions::{GETTER_PREFIX, SETTER_PREFIX};
use crate::names::{HelperNames, QualifiedName};
use crate::strings::capitalize_first;

/// A rendered-on-demand accessor expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AccessExpression {
    /// Read through an explicit receiver expression (e.g. a local variable).
    QualifiedGet {
        helper: QualifiedName,
        field: String,
        receiver: String,
    },
    /// Read where the argument is the field's own bare name in the current scope.
    ShortGet { helper: QualifiedName, field: String },
    /// Write `value` into `target`'s field.
    Set {
        helper: QualifiedName,
        field: String,
        target: String,
        value: String,
    },
}

impl AccessExpression {
    pub fn helper(&self) -> &QualifiedName {
        match self {
            AccessExpression::QualifiedGet { helper, .. }
            | AccessExpression::ShortGet { helper, .. }
            | AccessExpression::Set { helper, .. } => helper,
        }
    }

    pub fn field(&self) -> &str {
        match self {
            AccessExpression::QualifiedGet { field, .. }
            | AccessExpression::ShortGet { field, .. }
            | AccessExpression::Set { field, .. } => field,
        }
    }

    pub fn is_read(&self) -> bool {
        matches!(
            self,
            AccessExpression::QualifiedGet { .. } | AccessExpression::ShortGet { .. }
        )
    }

    /// Name of the helper method this expression calls (`getName`, `setName`).
    pub fn method_name(&self) -> String {
        let prefix = if self.is_read() { GETTER_PREFIX } else { SETTER_PREFIX };
        accessor_name(prefix, self.field())
    }

    /// Render the expression text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AccessExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = self.method_name();
        match self {
            AccessExpression::QualifiedGet { helper, receiver, .. } => write!(f, "{helper}.{method}({receiver})"),
            AccessExpression::ShortGet { helper, field } => write!(f, "{helper}.{method}({field})"),
            AccessExpression::Set {
                helper, target, value, ..
            } => write!(f, "{helper}.{method}({target}, {value})"),
        }
    }
}

/// Join an accessor prefix and a capitalized field name (`get` + `name` → `getName`).
pub fn accessor_name(prefix: &str, field: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + field.len());
    out.push_str(prefix);
    out.push_str(&capitalize_first(field));
    out
}

/// `<internal_helper>.get<Field>(<receiver>)`
pub fn qualified_get(internal_helper: &QualifiedName, field: &str, receiver: &str) -> AccessExpression {
    AccessExpression::QualifiedGet {
        helper: internal_helper.clone(),
        field: field.to_string(),
        receiver: receiver.to_string(),
    }
}

/// `<internal_helper>.get<Field>(<field>)`
pub fn short_get(internal_helper: &QualifiedName, field: &str) -> AccessExpression {
    AccessExpression::ShortGet {
        helper: internal_helper.clone(),
        field: field.to_string(),
    }
}

/// `<public_helper>.set<Field>(<target>, <value>)`
pub fn setter(public_helper: &QualifiedName, field: &str, target: &str, value: &str) -> AccessExpression {
    AccessExpression::Set {
        helper: public_helper.clone(),
        field: field.to_string(),
        target: target.to_string(),
        value: value.to_string(),
    }
}

impl HelperNames {
    /// Read `field` from `receiver` via the internal helper name.
    pub fn qualified_get(&self, field: &str, receiver: &str) -> AccessExpression {
        qualified_get(self.internal(), field, receiver)
    }

    /// Read `field` with the field's own name as argument, via the internal helper name.
    pub fn short_get(&self, field: &str) -> AccessExpression {
        short_get(self.internal(), field)
    }

    /// Write `value` into `target`'s `field` via the public helper name.
    pub fn setter(&self, field: &str, target: &str, value: &str) -> AccessExpression {
        setter(self.public(), field, target, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::derive_names;

    fn user_names() -> HelperNames {
        derive_names("com.example", "$", "User")
    }

    #[test]
    fn test_qualified_get_uses_internal_name() {
        let expr = user_names().qualified_get("name", "model");
        assert_eq!(expr.render(), "com.example.User$$Helper.getName(model)");
        assert!(expr.is_read());
    }

    #[test]
    fn test_short_get_passes_field_name_as_argument() {
        let expr = user_names().short_get("age");
        assert_eq!(expr.render(), "com.example.User$$Helper.getAge(age)");
    }

    #[test]
    fn test_setter_uses_public_name() {
        let expr = user_names().setter("name", "model", "\"Bob\"");
        assert_eq!(expr.render(), "com.example.User$Helper.setName(model, \"Bob\")");
        assert!(!expr.is_read());
        assert_eq!(expr.helper(), user_names().public());
    }

    #[test]
    fn test_free_functions_use_the_name_they_are_given() {
        let names = user_names();
        assert_eq!(
            qualified_get(names.public(), "name", "m").to_string(),
            "com.example.User$Helper.getName(m)"
        );
        assert_eq!(
            setter(names.internal(), "name", "m", "v").to_string(),
            "com.example.User$$Helper.setName(m, v)"
        );
    }

    #[test]
    fn test_placeholders_are_not_escaped() {
        let expr = user_names().qualified_get("name", "list.get(i)");
        assert_eq!(expr.render(), "com.example.User$$Helper.getName(list.get(i))");
    }

    #[test]
    fn test_method_names() {
        assert_eq!(accessor_name("get", "x"), "getX");
        assert_eq!(accessor_name("set", "Name"), "setName");
        assert_eq!(user_names().short_get("id").method_name(), "getId");
        assert_eq!(user_names().setter("id", "m", "1").method_name(), "setId");
    }

    #[test]
    fn test_field_accessor() {
        assert_eq!(user_names().setter("age", "m", "1").field(), "age");
    }
}
