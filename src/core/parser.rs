// src/core/parser.rs

use crate::{
    constants::{FLAG_PREFIX, HELP_PARAM, NEGATION_PREFIX, SHOW_PARAMS_PARAM},
    core::{
        diagnostics::DiagnosticSink,
        extract::{self, BooleanText},
        registry::Registry,
        render,
    },
    models::{BindingTable, ParameterKind, ParameterSpec, Value},
};
use std::io::Write;
use thiserror::Error;

/// A flag was found but the text after it does not fit the parameter's kind.
///
/// Never returned to the caller: it is reported through the diagnostics sink
/// and the parameter keeps its default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Malformed {kind} value for '--{name}': '{text}'. Using the default instead.")]
pub struct MalformedValue {
    /// Parameter whose value was rejected.
    pub name: String,
    /// Declared kind of that parameter.
    pub kind: ParameterKind,
    /// The text that followed the flag.
    pub text: String,
}

/// Conditions that stop a parse from returning bindings.
#[derive(Error, Debug)]
pub enum ParseError {
    /// `--help` was given. `usage` holds the rendered parameter table.
    #[error("Help was requested.")]
    HelpRequested {
        /// The rendered parameter table.
        usage: String,
    },
    /// The `--show_params` dump could not be written.
    #[error("Could not write the parameter dump: {0}")]
    Output(#[from] std::io::Error),
}

/// Where a flag was found and the raw text that follows it.
#[derive(Debug, PartialEq, Eq)]
struct Occurrence {
    position: usize,
    text: String,
}

/// Binds every declared parameter against `args`.
///
/// Parameters are processed in declaration order and independently of each
/// other: a malformed value is reported to `sink` and only that parameter
/// falls back to its default. Returns `ParseError::HelpRequested` when `help`
/// ends up bound to true.
pub fn parse<S: AsRef<str>>(
    registry: &Registry,
    args: &[S],
    sink: &mut dyn DiagnosticSink,
) -> Result<BindingTable, ParseError> {
    log::debug!(
        "Parsing {} argument(s) against {} declared parameter(s)",
        args.len(),
        registry.len()
    );

    let mut bindings = BindingTable::new();
    for spec in registry.list() {
        let value = bind(spec, args, sink);
        bindings.set(&spec.name, value);
    }

    if bindings.get_bool(HELP_PARAM) == Some(true) {
        return Err(ParseError::HelpRequested {
            usage: render::help_table(registry),
        });
    }
    Ok(bindings)
}

/// Parses like [`parse`], then writes the binding dump to `out` when
/// `show_params` is set.
pub fn run<S: AsRef<str>, W: Write>(
    registry: &Registry,
    args: &[S],
    sink: &mut dyn DiagnosticSink,
    out: &mut W,
) -> Result<BindingTable, ParseError> {
    let bindings = parse(registry, args, sink)?;
    if bindings.get_bool(SHOW_PARAMS_PARAM) == Some(true) {
        out.write_all(render::binding_dump(&bindings).as_bytes())?;
        out.flush()?;
    }
    Ok(bindings)
}

/// Resolves the final value of a single parameter.
fn bind<S: AsRef<str>>(spec: &ParameterSpec, args: &[S], sink: &mut dyn DiagnosticSink) -> Value {
    let Some(occurrence) = find_occurrence(args, &spec.name) else {
        if spec.kind == ParameterKind::Boolean && has_negation(args, &spec.name) {
            log::debug!("'--{}{}' found, binding false", NEGATION_PREFIX, spec.name);
            return Value::Boolean(false);
        }
        log::trace!("'--{}' not found, keeping default", spec.name);
        return spec.default.clone();
    };

    log::debug!(
        "'--{}' found at position {} (text: {:?})",
        spec.name,
        occurrence.position,
        occurrence.text
    );

    match spec.kind {
        ParameterKind::Integer => match extract::extract_integer(&occurrence.text) {
            Some(i) => Value::Integer(i),
            None => {
                let malformed = MalformedValue {
                    name: spec.name.clone(),
                    kind: spec.kind,
                    text: occurrence.text,
                };
                sink.error(&malformed.to_string());
                spec.default.clone()
            }
        },
        ParameterKind::String => Value::String(extract::extract_string(&occurrence.text)),
        ParameterKind::Boolean => match extract::extract_boolean(&occurrence.text) {
            BooleanText::Explicit(b) => Value::Boolean(b),
            BooleanText::Bare => Value::Boolean(true),
            BooleanText::Unrecognized => {
                // Presence still wins; the text is left for whoever reads it next.
                let ignored = extract::strip_assignment(&occurrence.text)
                    .split_whitespace()
                    .next()
                    .unwrap_or_default();
                sink.warning(&format!(
                    "'--{}' is followed by '{}', which is not 0 or 1. Treating the flag as set.",
                    spec.name, ignored
                ));
                Value::Boolean(true)
            }
        },
    }
}

/// Finds the first `--name` or `--name=...` token. Tokens are compared whole,
/// so `--name1` and `--othername` never match `name`.
fn find_occurrence<S: AsRef<str>>(args: &[S], name: &str) -> Option<Occurrence> {
    let flag = format!("{}{}", FLAG_PREFIX, name);
    args.iter().enumerate().find_map(|(position, token)| {
        let inline = match_flag(token.as_ref(), &flag)?;
        let rest = args.get(position + 1..).unwrap_or_default();
        Some(Occurrence {
            position,
            text: following_text(inline, rest),
        })
    })
}

/// `Some(None)` for `--name`, `Some(Some("=value"))` for `--name=value`.
///
/// The `=` is kept: the extractors strip exactly one, so `--name==5` stays malformed.
fn match_flag<'a>(token: &'a str, flag: &str) -> Option<Option<&'a str>> {
    let rest = token.strip_prefix(flag)?;
    if rest.is_empty() {
        Some(None)
    } else if rest.starts_with('=') {
        Some(Some(rest))
    } else {
        None
    }
}

/// The inline value (if any) followed by every token up to the next `--` flag.
fn following_text<S: AsRef<str>>(inline: Option<&str>, rest: &[S]) -> String {
    let mut parts: Vec<&str> = inline.into_iter().collect();
    parts.extend(
        rest.iter()
            .map(AsRef::as_ref)
            .take_while(|token| !token.starts_with(FLAG_PREFIX)),
    );
    parts.join(" ")
}

fn has_negation<S: AsRef<str>>(args: &[S], name: &str) -> bool {
    let negated = format!("{}{}{}", FLAG_PREFIX, NEGATION_PREFIX, name);
    args.iter().any(|token| token.as_ref() == negated)
}
