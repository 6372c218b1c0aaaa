//! A declarative command-line parameter registry and binding engine.
//!
//! Declare typed parameters into a [`core::registry::Registry`], then bind
//! them from an argument vector with [`core::parser::parse`]:
//!
//! ```
//! use declargs::core::{diagnostics::MemorySink, parser, registry::Registry};
//!
//! let mut registry = Registry::new();
//! registry.declare_integer("port", "Port to listen on", 8080).unwrap();
//! registry.declare_boolean("verbose", "Log more", false).unwrap();
//!
//! let mut sink = MemorySink::new();
//! let bindings = parser::parse(&registry, &["--port=9000", "--verbose"], &mut sink).unwrap();
//! assert_eq!(bindings.get_integer("port"), Some(9000));
//! assert_eq!(bindings.get_bool("verbose"), Some(true));
//! ```

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
