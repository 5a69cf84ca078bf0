//! Snapshot tests for rendered accessor expressions
//!
//! The rendered text is spliced verbatim into generated sources, so every
//! shape is pinned with an inline snapshot.
//!
//! Review changes: `cargo insta review`

use pkgaccess::{AbsentSeparator, AccessConfig, PackagePrivateAccess};

fn access(separator: Option<&str>) -> PackagePrivateAccess {
    let config = AccessConfig::new().with_absent_separator(AbsentSeparator::LegacyLiteral);
    PackagePrivateAccess::new(&config, "com.example", separator, "User").expect("valid owner")
}

#[test]
fn test_escaped_separator_expressions() {
    let access = access(Some("$"));
    insta::assert_snapshot!(access.names().public(), @"com.example.User$Helper");
    insta::assert_snapshot!(access.names().internal(), @"com.example.User$$Helper");
    insta::assert_snapshot!(
        access.column_access("name", "model").expect("field"),
        @"com.example.User$$Helper.getName(model)"
    );
    insta::assert_snapshot!(
        access.short_access("age").expect("field"),
        @"com.example.User$$Helper.getAge(age)"
    );
    insta::assert_snapshot!(
        access.set_access("name", "model", "\"Bob\"").expect("field"),
        @r#"com.example.User$Helper.setName(model, "Bob")"#
    );
}

#[test]
fn test_plain_separator_expressions() {
    let access = access(Some("_"));
    insta::assert_snapshot!(
        access.column_access("id", "cursor.getLong(0)").expect("field"),
        @"com.example.User_Helper.getId(cursor.getLong(0))"
    );
    insta::assert_snapshot!(
        access.set_access("id", "model", "cursor.getLong(0)").expect("field"),
        @"com.example.User_Helper.setId(model, cursor.getLong(0))"
    );
}

#[test]
fn test_single_letter_field() {
    let access = access(Some("$"));
    insta::assert_snapshot!(access.short_access("x").expect("field"), @"com.example.User$$Helper.getX(x)");
}

#[test]
fn test_legacy_absent_separator_expressions() {
    let access = access(None);
    insta::assert_snapshot!(
        access.short_access("name").expect("field"),
        @"com.example.UsernullHelper.getName(name)"
    );
    insta::assert_snapshot!(
        access.set_access("name", "model", "name").expect("field"),
        @"com.example.UsernullHelper.setName(model, name)"
    );
}
