//! Shared naming conventions (well-known identifiers).

/// Suffix appended to every generated helper type name.
pub const HELPER_SUFFIX: &str = "Helper";

/// Reserved escape character; also separates nested type names in binary names (`Outer$Inner`).
pub const ESCAPE_CHAR: char = '$';

/// Prefix of generated read accessors (`getName`).
pub const GETTER_PREFIX: &str = "get";

/// Prefix of generated write accessors (`setName`).
pub const SETTER_PREFIX: &str = "set";

/// Separator between a package and a simple type name.
pub const PACKAGE_SEPARATOR: char = '.';

/// Text that older generated code carries where no separator was configured.
pub const LEGACY_ABSENT_SEPARATOR: &str = "null";
