// src/cli/manifest.rs

use crate::{
    core::registry::Registry,
    models::{ParameterKind, Value},
};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The deserialized structure of a parameter manifest.
///
/// ```toml
/// [[param]]
/// name = "intarg"
/// kind = "integer"
/// description = "An integer argument"
/// default = 128
/// ```
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Declarations in file order.
    #[serde(default, rename = "param")]
    pub params: Vec<ManifestParam>,
}

/// One `[[param]]` table.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct ManifestParam {
    /// Parameter name, without the leading `--`.
    pub name: String,
    /// `integer`, `string` or `boolean`.
    pub kind: ParameterKind,
    /// Shown in the help table.
    #[serde(default)]
    pub description: String,
    /// Falls back to the zero value of `kind` when omitted.
    pub default: Option<Value>,
}

impl Manifest {
    /// Parses manifest text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Manifest is not valid TOML or has an unexpected shape")
    }

    /// Reads and parses a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest '{}'", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse manifest '{}'", path.display()))
    }

    /// Declares every parameter, in file order, into a fresh registry.
    pub fn into_registry(self) -> Result<Registry> {
        let mut registry = Registry::new();
        for param in self.params {
            registry
                .declare(&param.name, &param.description, param.kind, param.default)
                .with_context(|| format!("Invalid declaration for parameter '{}'", param.name))?;
        }
        log::debug!("Manifest declared {} parameter(s)", registry.len());
        Ok(registry)
    }
}
