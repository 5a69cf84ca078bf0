//! Provide pure naming and accessor-expression helpers for package-private field access in generated code.
//!
//! Generated code that lives outside a field's package cannot touch a package-private field directly. Instead it
//! calls static `get<Field>`/`set<Field>` methods on a generated helper type placed next to the field's owner. Every
//! stage that mentions that helper (expression emission, helper-method emission) must agree on its name textually,
//! so the naming rules live here, in one place.
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, no dependencies.
//! - Session state (which fields were requested) lives in the `pkgaccess` crate, not here.
//!
//! ## Examples
//! ```rust
//! use pkgaccess_core::derive_names;
//!
//! let names = derive_names("com.example", "$", "User");
//! assert_eq!(names.public().to_string(), "com.example.User$Helper");
//! assert_eq!(names.internal().to_string(), "com.example.User$$Helper");
//! assert_eq!(
//!     names.qualified_get("name", "model").to_string(),
//!     "com.example.User$$Helper.getName(model)"
//! );
//! ```

pub mod conventions;
pub mod expr;
pub mod names;
pub mod strings;

pub use expr::{AccessExpression, accessor_name, qualified_get, setter, short_get};
pub use names::{HelperNames, HelperNaming, QualifiedName, derive_names, is_escape_run};
pub use strings::capitalize_first;
