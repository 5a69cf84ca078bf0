#![forbid(unsafe_code)]
//! Package-private field access for generated code.
//!
//! Generated sources that read or write a package-private field from outside its package go through a generated
//! helper type. This crate derives that helper's names, renders the accessor expressions, and tracks (per
//! generation session) which fields need helper methods at all.
//!
//! ## Layout
//!
//! - [`pkgaccess_core`] - pure naming and expression rules, re-exported here
//! - [`registry`] - session-scoped record of requested accessors
//! - [`access`] - [`PackagePrivateAccess`], the facade generator stages call
//! - [`config`], [`errors`], [`resolve`] - configuration, error types, and the upstream resolver seam
//! - [`cli`] - debugging command-line front end
//!
//! ## Panic Policy
//!
//! - **Production code**: `Result` with `?`. The `cli` and `access` modules enforce `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod access;
pub mod cli;
pub mod config;
pub mod errors;
pub mod registry;
pub mod resolve;

pub use pkgaccess_core;
pub use pkgaccess_core::{AccessExpression, HelperNames, HelperNaming, QualifiedName, derive_names};

pub use access::PackagePrivateAccess;
pub use config::{AbsentSeparator, AccessConfig};
pub use errors::{AccessError, AccessResult};
pub use registry::{AccessRegistry, GenerationSession, SessionReport};
pub use resolve::{OwnerResolver, StaticResolver};
