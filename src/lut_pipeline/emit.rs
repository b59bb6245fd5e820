//! LUT emission module
//!
//! This module renders cube entries as C brace-initializer records.

mod brace_writer;
mod probe;
mod writer;

pub use brace_writer::BraceInitializerWriter;
pub use probe::write_probe;
pub use writer::LutWriter;
