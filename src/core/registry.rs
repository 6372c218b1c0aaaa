// src/core/registry.rs

use crate::{
    constants::{HELP_PARAM, SHOW_PARAMS_PARAM},
    models::{BindingTable, ParameterKind, ParameterSpec, Value},
};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use thiserror::Error;

lazy_static! {
    // No whitespace anywhere, no `=` (it separates inline values), no leading dash.
    static ref PARAMETER_NAME_RE: Regex =
        Regex::new(r"^[^\s=\-][^\s=]*$").expect("parameter name pattern is valid");
}

/// Why a declaration was refused.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DeclarationError {
    /// The name is taken, by a caller declaration or a reserved parameter.
    #[error("Parameter '{0}' is already declared.")]
    DuplicateName(String),
    /// Empty, or contains whitespace or `=`, or starts with `-`.
    #[error("Invalid parameter name '{0}': it must be non-empty, without whitespace, '=' or a leading '-'.")]
    InvalidName(String),
    /// The supplied default is not of the declared kind.
    #[error("Default for parameter '{name}' is a {found} but the parameter is declared as {expected}.")]
    DefaultKindMismatch {
        /// Parameter being declared.
        name: String,
        /// Declared kind.
        expected: ParameterKind,
        /// Kind of the supplied default.
        found: ParameterKind,
    },
}

/// The ordered collection of parameter declarations.
///
/// A fresh registry already holds the two reserved booleans, `help` and
/// `show_params`. Declarations are append-only.
#[derive(Debug, Clone)]
pub struct Registry {
    specs: Vec<ParameterSpec>,
    by_name: HashMap<String, usize>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Creates a registry with only the reserved parameters declared.
    pub fn new() -> Self {
        let mut registry = Self {
            specs: Vec::new(),
            by_name: HashMap::new(),
        };
        registry.push(ParameterSpec {
            name: HELP_PARAM.to_string(),
            description: "Print this parameter table and exit.".to_string(),
            kind: ParameterKind::Boolean,
            default: Value::Boolean(false),
        });
        registry.push(ParameterSpec {
            name: SHOW_PARAMS_PARAM.to_string(),
            description: "Print every parameter value after parsing.".to_string(),
            kind: ParameterKind::Boolean,
            default: Value::Boolean(false),
        });
        registry
    }

    /// Declares a parameter. `default: None` uses the zero value of `kind`.
    pub fn declare(
        &mut self,
        name: &str,
        description: &str,
        kind: ParameterKind,
        default: Option<Value>,
    ) -> Result<(), DeclarationError> {
        if !PARAMETER_NAME_RE.is_match(name) {
            return Err(DeclarationError::InvalidName(name.to_string()));
        }
        if self.by_name.contains_key(name) {
            return Err(DeclarationError::DuplicateName(name.to_string()));
        }

        let default = default.unwrap_or_else(|| kind.zero_value());
        if default.kind() != kind {
            return Err(DeclarationError::DefaultKindMismatch {
                name: name.to_string(),
                expected: kind,
                found: default.kind(),
            });
        }

        log::debug!("Declared {} parameter '{}' (default: {})", kind, name, default);
        self.push(ParameterSpec {
            name: name.to_string(),
            description: description.to_string(),
            kind,
            default,
        });
        Ok(())
    }

    /// Declares an integer parameter.
    pub fn declare_integer(
        &mut self,
        name: &str,
        description: &str,
        default: i64,
    ) -> Result<(), DeclarationError> {
        self.declare(name, description, ParameterKind::Integer, Some(default.into()))
    }

    /// Declares a string parameter.
    pub fn declare_string(
        &mut self,
        name: &str,
        description: &str,
        default: &str,
    ) -> Result<(), DeclarationError> {
        self.declare(name, description, ParameterKind::String, Some(default.into()))
    }

    /// Declares a boolean parameter.
    pub fn declare_boolean(
        &mut self,
        name: &str,
        description: &str,
        default: bool,
    ) -> Result<(), DeclarationError> {
        self.declare(name, description, ParameterKind::Boolean, Some(default.into()))
    }

    /// Every declaration, in declaration order.
    pub fn list(&self) -> &[ParameterSpec] {
        &self.specs
    }

    /// Looks up a declaration by name.
    pub fn get(&self, name: &str) -> Option<&ParameterSpec> {
        self.by_name.get(name).and_then(|&pos| self.specs.get(pos))
    }

    /// A binding table where every parameter holds its default.
    pub fn defaults(&self) -> BindingTable {
        let mut table = BindingTable::new();
        for spec in &self.specs {
            table.set(&spec.name, spec.default.clone());
        }
        table
    }

    /// Number of declarations, reserved ones included.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Never true for a registry built with `new`.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    fn push(&mut self, spec: ParameterSpec) {
        self.by_name.insert(spec.name.clone(), self.specs.len());
        self.specs.push(spec);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_has_reserved_parameters() {
        let registry = Registry::new();
        let names: Vec<&str> = registry.list().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec![HELP_PARAM, SHOW_PARAMS_PARAM]);
        for spec in registry.list() {
            assert_eq!(spec.kind, ParameterKind::Boolean);
            assert_eq!(spec.default, Value::Boolean(false));
        }
    }

    #[test]
    fn test_declare_preserves_order() {
        let mut registry = Registry::new();
        registry.declare_integer("intarg", "An integer", 128).unwrap();
        registry.declare_string("strarg", "A string", "x").unwrap();
        registry.declare_boolean("boolarg", "A flag", false).unwrap();

        let names: Vec<&str> = registry.list().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![HELP_PARAM, SHOW_PARAMS_PARAM, "intarg", "strarg", "boolarg"]
        );
        assert_eq!(registry.get("intarg").unwrap().default, Value::Integer(128));
    }

    #[test]
    fn test_declare_without_default_uses_zero_value() {
        let mut registry = Registry::new();
        registry
            .declare("count", "", ParameterKind::Integer, None)
            .unwrap();
        registry
            .declare("label", "", ParameterKind::String, None)
            .unwrap();
        registry
            .declare("flag", "", ParameterKind::Boolean, None)
            .unwrap();

        let defaults = registry.defaults();
        assert_eq!(defaults.get_integer("count"), Some(0));
        assert_eq!(defaults.get_str("label"), Some(""));
        assert_eq!(defaults.get_bool("flag"), Some(false));
    }

    #[test]
    fn test_declare_duplicate_fails() {
        let mut registry = Registry::new();
        registry.declare_integer("port", "", 80).unwrap();
        let result = registry.declare_string("port", "", "");
        assert_eq!(
            result,
            Err(DeclarationError::DuplicateName("port".to_string()))
        );
        assert_eq!(registry.get("port").unwrap().kind, ParameterKind::Integer);
    }

    #[test]
    fn test_declare_reserved_name_fails() {
        let mut registry = Registry::new();
        assert!(matches!(
            registry.declare_boolean("help", "", true),
            Err(DeclarationError::DuplicateName(_))
        ));
        assert!(matches!(
            registry.declare_integer("show_params", "", 1),
            Err(DeclarationError::DuplicateName(_))
        ));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_declare_invalid_names() {
        let mut registry = Registry::new();
        for bad in ["", "-x", "--x", "two words", "tab\tname", "a=b"] {
            assert_eq!(
                registry.declare_boolean(bad, "", false),
                Err(DeclarationError::InvalidName(bad.to_string())),
                "name {:?} should be rejected",
                bad
            );
        }
        assert!(registry.declare_boolean("dry-run", "", false).is_ok());
    }

    #[test]
    fn test_declare_default_kind_mismatch() {
        let mut registry = Registry::new();
        let result = registry.declare(
            "count",
            "",
            ParameterKind::Integer,
            Some(Value::from("ten")),
        );
        assert_eq!(
            result,
            Err(DeclarationError::DefaultKindMismatch {
                name: "count".to_string(),
                expected: ParameterKind::Integer,
                found: ParameterKind::String,
            })
        );
        assert!(registry.get("count").is_none());
    }
}
