// src/core/mod.rs

pub mod diagnostics;
pub mod extract;
pub mod parser;
pub mod registry;
pub mod render;
