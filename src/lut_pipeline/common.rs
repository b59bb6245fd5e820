//! Common utilities module
//!
//! This module contains the error types and configuration shared across the LUT pipeline.

pub mod config;
pub mod error;

pub use config::{ConversionConfig, ConversionConfigBuilder, MissingInputPolicy, Traversal};
pub use error::{LutError, RecordError, Result};
