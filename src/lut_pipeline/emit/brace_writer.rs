use std::io::Write;

use tracing::debug;

use crate::lut_pipeline::common::config::ConversionConfig;
use crate::lut_pipeline::common::error::Result;
use crate::lut_pipeline::cuboid::Cuboid;
use crate::lut_pipeline::emit::writer::LutWriter;

/// Emits one `\t{ .red = …, .green = …, .blue = … },` line per cube entry,
/// ready to paste into a C initializer list.
pub struct BraceInitializerWriter;

impl LutWriter for BraceInitializerWriter {
    fn write_lut(&self, cube: &Cuboid, output: &mut dyn Write, config: &ConversionConfig) -> Result<usize> {
        debug!("Writing {} entries in {} order", cube.len(), config.traversal);

        let mut written = 0;
        for triple in cube.traverse(config.traversal) {
            writeln!(output, "{}", triple)?;
            written += 1;
        }
        output.flush()?;

        Ok(written)
    }
}
