//! LUT text parsing module
//!
//! This module turns LUT text input into an ordered sequence of normalized color triples.

mod reader;
mod text_reader;
pub mod types;

pub use reader::LutReader;
pub use text_reader::{TextLutReader, parse_record};
pub use types::{ColorSequence, ColorTriple, ParsedLut, SkippedRecord};
