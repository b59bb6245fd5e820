//! LUT conversion configuration types

use std::fmt;
use std::str::FromStr;

use crate::lut_pipeline::common::error::LutError;

/// Full-scale value of the 12-bit input samples.
pub const DEFAULT_MAX_VALUE: f64 = 4095.0;

/// Grid points per cube axis.
pub const DEFAULT_SIDE: usize = 17;

/// Order in which cube entries are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Visit `cube[i][j][k]` with `k` varying fastest
    Rgb,
    /// Same loop nesting, but look up `cube[k][j][i]`
    Bgr,
}

impl FromStr for Traversal {
    type Err = LutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rgb" => Ok(Traversal::Rgb),
            "bgr" => Ok(Traversal::Bgr),
            _ => Err(LutError::UnknownTraversal(s.to_string())),
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Traversal::Rgb => f.write_str("rgb"),
            Traversal::Bgr => f.write_str("bgr"),
        }
    }
}

/// What to do when the input file cannot be opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingInputPolicy {
    /// Abort the conversion with `LutError::InputReadError`
    Fail,
    /// Warn and continue with an empty sequence
    Empty,
}

/// Configuration for a LUT conversion run
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Raw value that normalizes to 1.0
    pub max_value: f64,
    /// Number of grid points per cube axis
    pub side: usize,
    /// Emission order
    pub traversal: Traversal,
    /// Behavior when the input path cannot be opened
    pub missing_input: MissingInputPolicy,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            max_value: DEFAULT_MAX_VALUE,
            side: DEFAULT_SIDE,
            traversal: Traversal::Rgb,
            missing_input: MissingInputPolicy::Fail,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    max_value: Option<f64>,
    side: Option<usize>,
    traversal: Option<Traversal>,
    missing_input: Option<MissingInputPolicy>,
}

impl ConversionConfigBuilder {
    pub fn max_value(mut self, max_value: f64) -> Self {
        self.max_value = Some(max_value);
        self
    }

    pub fn side(mut self, side: usize) -> Self {
        self.side = Some(side);
        self
    }

    pub fn traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = Some(traversal);
        self
    }

    pub fn missing_input(mut self, policy: MissingInputPolicy) -> Self {
        self.missing_input = Some(policy);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            max_value: self.max_value.unwrap_or(default.max_value),
            side: self.side.unwrap_or(default.side),
            traversal: self.traversal.unwrap_or(default.traversal),
            missing_input: self.missing_input.unwrap_or(default.missing_input),
        }
    }
}
