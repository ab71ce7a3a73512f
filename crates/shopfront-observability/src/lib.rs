//! Observability setup for Shopfront binaries.
//!
//! Library crates only emit `tracing` events; binaries call [`init`] once to
//! install a subscriber:
//! - `LogConfig` - Level and output format, usually read from config
//! - `LogFormat` - Human-readable or JSON lines
//! - `init` - Registry with an `EnvFilter` honouring `RUST_LOG`

mod logging;

pub use logging::*;
