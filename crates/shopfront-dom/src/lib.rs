//! Page surface abstraction for Shopfront views.
//!
//! Views render into selector-addressed containers instead of a browser DOM:
//! - `Fragment` - HTML made of plain markup and addressable nodes
//! - `PageSurface` - The operations a page performs on its document
//! - `MemorySurface` - In-memory surface used by the CLI and tests
//! - `Shell` - Document template wrapping the rendered containers

mod fragment;
mod shell;
mod surface;

pub use fragment::*;
pub use shell::*;
pub use surface::*;
