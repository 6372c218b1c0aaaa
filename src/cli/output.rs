// src/cli/output.rs

use crate::{cli::OutputFormat, core::render, models::BindingTable};
use anyhow::{Context, Result};
use std::fmt::Write;

/// Formats the bindings for stdout.
pub fn format_bindings(bindings: &BindingTable, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Shell => shell_assignments(bindings),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(bindings).context("Failed to serialize bindings")?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Dump => Ok(render::binding_dump(bindings)),
    }
}

/// One `name=value` line per binding, safe to `eval` in a POSIX shell.
fn shell_assignments(bindings: &BindingTable) -> Result<String> {
    let mut out = String::new();
    for (name, value) in bindings.iter() {
        let text = value.to_string();
        let quoted = shlex::try_quote(&text)
            .with_context(|| format!("Value of '{}' cannot be quoted for a shell", name))?;
        let _ = writeln!(out, "{}={}", shell_identifier(name), quoted);
    }
    Ok(out)
}

/// Maps a parameter name to a valid shell variable name (`dry-run` -> `dry_run`).
fn shell_identifier(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Value;

    fn sample_bindings() -> BindingTable {
        let mut bindings = BindingTable::new();
        bindings.set("intarg", Value::Integer(-7));
        bindings.set("strarg", Value::from("a b c"));
        bindings.set("dry-run", Value::Boolean(true));
        bindings
    }

    #[test]
    fn test_shell_identifier() {
        assert_eq!(shell_identifier("show_params"), "show_params");
        assert_eq!(shell_identifier("dry-run"), "dry_run");
        assert_eq!(shell_identifier("2fa"), "_2fa");
        assert_eq!(shell_identifier("a.b"), "a_b");
    }

    #[test]
    fn test_shell_format_quotes_values() {
        let out = format_bindings(&sample_bindings(), OutputFormat::Shell).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("intarg=") && lines[0].contains("-7"));
        assert!(lines[1].starts_with("strarg="));
        assert_ne!(lines[1], "strarg=a b c");
        assert_eq!(lines[2], "dry_run=true");
    }

    #[test]
    fn test_shell_format_empty_string() {
        let mut bindings = BindingTable::new();
        bindings.set("empty", Value::from(""));
        let out = format_bindings(&bindings, OutputFormat::Shell).unwrap();
        assert!(out == "empty=''\n" || out == "empty=\"\"\n", "got {:?}", out);
    }

    #[test]
    fn test_json_format() {
        let out = format_bindings(&sample_bindings(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["intarg"], serde_json::json!(-7));
        assert_eq!(parsed["strarg"], serde_json::json!("a b c"));
        assert_eq!(parsed["dry-run"], serde_json::json!(true));
    }

    #[test]
    fn test_dump_format_matches_renderer() {
        let bindings = sample_bindings();
        let out = format_bindings(&bindings, OutputFormat::Dump).unwrap();
        assert_eq!(out, render::binding_dump(&bindings));
    }
}
