// The drill engine is a library; main.rs only wires it to stdin/stdout,
// the config file and the vocabulary provider. Integration tests import
// via `lexidr::session::*` / `lexidr::challenge::*`.

pub mod challenge;
pub mod config;
pub mod engine;
pub mod error;
pub mod session;
pub mod speech;
pub mod vocab;
