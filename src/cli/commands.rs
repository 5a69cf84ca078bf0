//! CLI command implementations
//!
//! All command functions return `CliResult<String>` with the text to print.
//! Error handling and exits happen in the top-level `run()`.

use serde_json::{Value, json};

use pkgaccess_core::conventions::{GETTER_PREFIX, SETTER_PREFIX};
use pkgaccess_core::{AccessExpression, accessor_name};

use crate::access::PackagePrivateAccess;
use crate::config::AccessConfig;
use crate::registry::GenerationSession;

use super::{CliError, CliResult, HelperArgs};

fn access_for(helper: &HelperArgs) -> CliResult<PackagePrivateAccess> {
    Ok(PackagePrivateAccess::new(
        &helper.config(),
        &helper.package,
        helper.separator.as_deref(),
        &helper.owner,
    )?)
}

fn render_json(value: &Value) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| CliError::failure(format!("Error encoding JSON: {}", e)))
}

fn expression_output(expr: &AccessExpression, json: bool) -> CliResult<String> {
    if !json {
        return Ok(expr.render());
    }
    render_json(&json!({
        "expression": expr.render(),
        "helper": expr.helper().to_string(),
        "method": expr.method_name(),
        "read": expr.is_read(),
    }))
}

// ============================================================================
// Single-owner commands
// ============================================================================

/// Show both helper names for one owner type.
pub fn names(helper: &HelperArgs, json: bool) -> CliResult<String> {
    let access = access_for(helper)?;
    let names = access.names();
    if json {
        return render_json(&json!({
            "owner": access.owner().to_string(),
            "public": names.public().to_string(),
            "internal": names.internal().to_string(),
            "escaped": names.is_escaped(),
        }));
    }
    Ok(format!("public:   {}\ninternal: {}", names.public(), names.internal()))
}

/// Render a read; the short form is used when no receiver is given.
pub fn get(helper: &HelperArgs, field: &str, receiver: Option<&str>, json: bool) -> CliResult<String> {
    let access = access_for(helper)?;
    let expr = match receiver {
        Some(receiver) => access.column_access(field, receiver)?,
        None => access.short_access(field)?,
    };
    expression_output(&expr, json)
}

/// Render a write.
pub fn set(helper: &HelperArgs, field: &str, target: &str, value: &str, json: bool) -> CliResult<String> {
    let access = access_for(helper)?;
    let expr = access.set_access(field, target, value)?;
    expression_output(&expr, json)
}

// ============================================================================
// Session planning
// ============================================================================

fn split_access(spec: &str) -> CliResult<(&str, &str)> {
    match spec.split_once('.') {
        Some((owner, field)) if !owner.is_empty() && !field.is_empty() && !field.contains('.') => Ok((owner, field)),
        _ => Err(CliError::failure(format!("Error: expected OWNER.FIELD, got `{}`", spec))),
    }
}

/// Record every access in a fresh session and list, per owner, the helper methods the emitter has to define.
pub fn plan(
    config: &AccessConfig,
    package: &str,
    separator: Option<&str>,
    accesses: &[String],
    json: bool,
) -> CliResult<String> {
    let session = GenerationSession::begin();
    for spec in accesses {
        let (owner, field) = split_access(spec)?;
        let access = PackagePrivateAccess::new(config, package, separator, owner)?;
        access.record(session.registry(), field)?;
    }
    let report = session.end();

    let mut owners = Vec::with_capacity(report.owner_count());
    for (owner, fields) in report.iter() {
        let access = PackagePrivateAccess::new(config, owner.package(), separator, owner.simple_name())?;
        let methods: Vec<(String, String)> = fields
            .iter()
            .map(|f| (accessor_name(GETTER_PREFIX, f), accessor_name(SETTER_PREFIX, f)))
            .collect();
        owners.push((access, methods));
    }

    if json {
        let entries: Vec<Value> = owners
            .iter()
            .map(|(access, methods)| {
                json!({
                    "owner": access.owner().to_string(),
                    "helper": access.names().public().to_string(),
                    "methods": methods
                        .iter()
                        .flat_map(|(get, set)| [get.clone(), set.clone()])
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        return render_json(&Value::Array(entries));
    }

    let mut out = String::new();
    for (access, methods) in &owners {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&access.names().public().to_string());
        for (get, set) in methods {
            out.push_str(&format!("\n  {} / {}", get, set));
        }
    }
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cli::AbsentPolicy;

    fn helper(separator: Option<&str>) -> HelperArgs {
        HelperArgs {
            package: "com.example".to_string(),
            owner: "User".to_string(),
            separator: separator.map(str::to_string),
            absent_separator: AbsentPolicy::Reject,
        }
    }

    #[test]
    fn test_get_short_and_qualified() {
        assert_eq!(
            get(&helper(Some("$")), "age", None, false).unwrap(),
            "com.example.User$$Helper.getAge(age)"
        );
        assert_eq!(
            get(&helper(Some("$")), "name", Some("model"), false).unwrap(),
            "com.example.User$$Helper.getName(model)"
        );
    }

    #[test]
    fn test_set_json() {
        let out = set(&helper(Some("$")), "name", "model", "\"Bob\"", true).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["expression"], "com.example.User$Helper.setName(model, \"Bob\")");
        assert_eq!(value["helper"], "com.example.User$Helper");
        assert_eq!(value["method"], "setName");
        assert_eq!(value["read"], false);
    }

    #[test]
    fn test_names_json() {
        let out = names(&helper(Some("_")), true).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["public"], "com.example.User_Helper");
        assert_eq!(value["internal"], "com.example.User_Helper");
        assert_eq!(value["escaped"], false);
    }

    #[test]
    fn test_names_with_legacy_absent_separator() {
        let mut args = helper(None);
        args.absent_separator = AbsentPolicy::Legacy;
        let out = names(&args, false).unwrap();
        assert!(out.starts_with("public:   com.example.UsernullHelper"));
    }

    #[test]
    fn test_plan_dedupes_and_orders() {
        let accesses: Vec<String> = ["User.name", "Order.total", "User.age", "User.name"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let out = plan(&AccessConfig::default(), "com.example", Some("$"), &accesses, false).unwrap();
        assert_eq!(
            out,
            "com.example.Order$Helper\n  getTotal / setTotal\n\
             com.example.User$Helper\n  getName / setName\n  getAge / setAge"
        );
    }

    #[test]
    fn test_plan_rejects_malformed_access() {
        let accesses = vec!["User".to_string()];
        let err = plan(&AccessConfig::default(), "p", Some("$"), &accesses, false).unwrap_err();
        assert!(err.message.contains("expected OWNER.FIELD"));
    }

    #[test]
    fn test_plan_json() {
        let accesses = vec!["User.id".to_string()];
        let out = plan(&AccessConfig::default(), "p", Some(""), &accesses, true).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["helper"], "p.UserHelper");
        assert_eq!(value[0]["methods"], json!(["getId", "setId"]));
    }
}
