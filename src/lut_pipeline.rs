//! 3D LUT conversion pipeline module
//!
//! This module turns a text LUT of integer RGB triples into normalized
//! brace-initializer records, with separate modules for parsing, cube
//! construction, emission, and conversion orchestration.

pub mod common;
pub mod conversions;
pub mod cuboid;
pub mod emit;
pub mod parse;

pub use common::{
    ConversionConfig,
    ConversionConfigBuilder,
    LutError,
    MissingInputPolicy,
    RecordError,
    Result,
    Traversal,
};

pub use parse::{
    ColorSequence,
    ColorTriple,
    LutReader,
    ParsedLut,
    SkippedRecord,
    TextLutReader,
};

pub use cuboid::Cuboid;

pub use emit::{
    BraceInitializerWriter,
    LutWriter,
};

pub use conversions::{
    ConversionSummary,
    LutConversionPipeline,
};
