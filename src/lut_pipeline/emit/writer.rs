use std::io::Write;

use crate::lut_pipeline::common::config::ConversionConfig;
use crate::lut_pipeline::common::error::Result;
use crate::lut_pipeline::cuboid::Cuboid;

pub trait LutWriter {
    /// Writes the cube in the configured traversal order and returns the number of records written.
    fn write_lut(&self, cube: &Cuboid, output: &mut dyn Write, config: &ConversionConfig) -> Result<usize>;
}
