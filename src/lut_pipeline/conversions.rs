//! Pipeline conversions module
//!
//! This module wires the reader, cube builder and writer into a single conversion run.

mod text_to_brace;
mod tests;

pub use text_to_brace::{ConversionSummary, LutConversionPipeline};
