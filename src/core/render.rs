// src/core/render.rs

use crate::{
    constants::HELP_COLUMN_WIDTH,
    core::registry::Registry,
    models::{BindingTable, Value},
};
use std::fmt::Write;

const DUMP_SEPARATOR: &str = "----------------------------------------";

/// Renders the parameter table printed for `--help`.
///
/// Three columns (name, default, description) with a header and a separator
/// row, in declaration order. Output is plain text and depends only on the
/// registry, so two identical registries always render the same bytes.
pub fn help_table(registry: &Registry) -> String {
    let width = HELP_COLUMN_WIDTH;
    let rule = "-".repeat(width);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "{:<width$} {:<width$} {}",
        "Parameter", "Default", "Description"
    );
    let _ = writeln!(out, "{} {} {}", rule, rule, rule);

    for spec in registry.list() {
        let default = display_value(&spec.default);
        let _ = writeln!(
            out,
            "{:<width$} {:<width$} {}",
            spec.name, default, spec.description
        );
    }
    out
}

/// Renders the `--show_params` dump: `name = value` per line between separators.
pub fn binding_dump(bindings: &BindingTable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", DUMP_SEPARATOR);
    for (name, value) in bindings.iter() {
        let _ = writeln!(out, "{} = {}", name, display_value(value));
    }
    let _ = writeln!(out, "{}", DUMP_SEPARATOR);
    out
}

// Empty strings are shown as `""` so the column is never blank.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) if s.is_empty() => "\"\"".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .declare_integer("intarg", "An integer argument", 128)
            .unwrap();
        registry.declare_string("strarg", "A string argument", "").unwrap();
        registry
            .declare_boolean("boolarg", "A boolean argument", false)
            .unwrap();
        registry
    }

    #[test]
    fn test_help_table_layout() {
        let table = help_table(&sample_registry());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 2 + 5);
        assert!(lines[0].starts_with("Parameter            Default              Description"));
        assert!(lines[1].starts_with(&"-".repeat(HELP_COLUMN_WIDTH)));
        assert!(lines[2].starts_with("help "));
        assert!(lines[3].starts_with("show_params "));
        assert_eq!(
            lines[4],
            "intarg               128                  An integer argument"
        );
        assert_eq!(
            lines[5],
            "strarg               \"\"                   A string argument"
        );
        assert_eq!(
            lines[6],
            "boolarg              false                A boolean argument"
        );
    }

    #[test]
    fn test_help_table_is_deterministic() {
        let first = help_table(&sample_registry());
        let second = help_table(&sample_registry());
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_binding_dump_format() {
        let mut bindings = BindingTable::new();
        bindings.set("intarg", Value::Integer(42));
        bindings.set("strarg", Value::from("a b c"));
        bindings.set("boolarg", Value::Boolean(true));

        let dump = binding_dump(&bindings);
        let expected = format!(
            "{sep}\nintarg = 42\nstrarg = a b c\nboolarg = true\n{sep}\n",
            sep = DUMP_SEPARATOR
        );
        assert_eq!(dump, expected);
    }
}
