// src/scrape/mod.rs
mod functions;

pub use functions::{FunctionEntry, FunctionSet, extract, extract_with_builtins, fetch};
